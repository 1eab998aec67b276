use serde::Serialize;
use std::collections::BTreeMap;
use crate::errors::LogReportError;
use crate::models::{HandlerCounts, LevelCounts};

#[derive(Serialize)]
struct HandlerRow<'a> {
    #[serde(flatten)]
    counts: &'a LevelCounts,
    total: u64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    total_requests: u64,
    handlers: BTreeMap<&'a str, HandlerRow<'a>>,
    totals: LevelCounts,
}

/// Machine-readable rendering of the same data the handlers table shows.
/// Endpoints are emitted in path order.
pub fn render_json(data: &HandlerCounts) -> Result<String, LogReportError> {
    let mut totals = LevelCounts::new();
    let mut handlers = BTreeMap::new();
    for (handler, counts) in data {
        totals += counts;
        handlers.insert(handler.as_str(), HandlerRow { counts, total: counts.total() });
    }

    let report = JsonReport {
        total_requests: totals.total(),
        handlers,
        totals,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
