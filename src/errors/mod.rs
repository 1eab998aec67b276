pub mod types;
pub mod classification;

pub use types::LogReportError;
pub use classification::ErrorClassification;
