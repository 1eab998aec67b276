use std::collections::hash_map::Entry;
use crate::models::HandlerCounts;

/// Merge per-file results into one, summing counts level by level for
/// endpoints that appear in more than one file.
pub fn aggregate<I>(results: I) -> HandlerCounts
where
    I: IntoIterator<Item = HandlerCounts>,
{
    let mut aggregated = HandlerCounts::new();
    for file_result in results {
        for (handler, counts) in file_result {
            match aggregated.entry(handler) {
                Entry::Vacant(e) => { e.insert(counts); }
                Entry::Occupied(mut e) => { *e.get_mut() += counts; }
            }
        }
    }
    aggregated
}
