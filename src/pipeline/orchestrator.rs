use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use crate::errors::LogReportError;
use crate::models::HandlerCounts;
use crate::parser::process_file;
use super::aggregate::aggregate;
use tracing::{debug, error, info, warn};

/// Counts extracted from one input file.
#[derive(Debug)]
pub struct FileResult {
    pub path: PathBuf,
    pub counts: HandlerCounts,
}

/// An input file whose extraction failed. Excluded from aggregation.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: LogReportError,
}

#[derive(Debug, Default)]
pub struct ExtractionOutcome {
    pub results: Vec<FileResult>,
    pub failures: Vec<FileFailure>,
}

impl ExtractionOutcome {
    /// Merge every successful file result.
    pub fn aggregate(self) -> HandlerCounts {
        aggregate(self.results.into_iter().map(|r| r.counts))
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Worker count used when neither the CLI nor the config file sets one.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Extract every file on the blocking pool, at most `workers` at a time.
///
/// A failing file is recorded in [`ExtractionOutcome::failures`] and does not
/// stop the others. Results keep the order of `paths`.
pub async fn run_extraction(paths: &[PathBuf], workers: usize) -> ExtractionOutcome {
    let permits = Arc::new(Semaphore::new(workers.max(1)));
    info!(files = paths.len(), workers = workers.max(1), "Starting extraction");

    let handles: Vec<_> = paths
        .iter()
        .map(|path| tokio::spawn(extract_one(path.clone(), permits.clone())))
        .collect();

    let joined = futures::future::join_all(handles).await;

    let mut outcome = ExtractionOutcome::default();
    for (path, task) in paths.iter().zip(joined) {
        let result = task.unwrap_or_else(|e| {
            error!(path = %path.display(), error = %e, "Extraction task panicked");
            Err(LogReportError::Internal(format!("Extraction task panicked: {}", e)))
        });
        record(&mut outcome, path, result);
    }

    info!(
        succeeded = outcome.results.len(),
        failed = outcome.failures.len(),
        "Extraction complete"
    );
    outcome
}

async fn extract_one(path: PathBuf, permits: Arc<Semaphore>) -> Result<HandlerCounts, LogReportError> {
    let _permit = permits
        .acquire_owned()
        .await
        .map_err(|e| LogReportError::Internal(format!("Worker pool closed: {}", e)))?;
    tokio::task::spawn_blocking(move || process_file(&path))
        .await
        .map_err(|e| LogReportError::Internal(format!("Extraction task failed: {}", e)))?
}

fn record(outcome: &mut ExtractionOutcome, path: &Path, result: Result<HandlerCounts, LogReportError>) {
    match result {
        Ok(counts) => {
            debug!(path = %path.display(), handlers = counts.len(), "File extracted");
            outcome.results.push(FileResult { path: path.to_path_buf(), counts });
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "File extraction failed");
            outcome.failures.push(FileFailure { path: path.to_path_buf(), error: e });
        }
    }
}
