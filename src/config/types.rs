use serde::{Deserialize, Serialize};
use crate::reporting::{OutputFormat, ReportKind};

/// Optional YAML configuration. Every field may be overridden on the command line.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LogReportConfig {
    /// Maximum number of files extracted concurrently
    pub workers: Option<usize>,
    pub report: Option<ReportKind>,
    pub format: Option<OutputFormat>,
}
