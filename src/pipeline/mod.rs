pub mod aggregate;
pub mod orchestrator;

pub use aggregate::aggregate;
pub use orchestrator::{default_workers, run_extraction, ExtractionOutcome, FileFailure, FileResult};
