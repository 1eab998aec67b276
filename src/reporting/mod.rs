pub mod handlers;
pub mod json;

use serde::{Deserialize, Serialize};
use crate::errors::LogReportError;
use crate::models::HandlerCounts;

pub use handlers::HandlersReport;
pub use json::render_json;

/// A text report over aggregated handler counts. Implementations are pure.
pub trait Report: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, data: &HandlerCounts) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Requests per endpoint broken down by level
    Handlers,
}

impl ReportKind {
    pub fn build(&self) -> Box<dyn Report> {
        match self {
            ReportKind::Handlers => Box::new(HandlersReport),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render `data` as the selected report in the selected format.
pub fn render(kind: ReportKind, format: OutputFormat, data: &HandlerCounts) -> Result<String, LogReportError> {
    match format {
        OutputFormat::Text => Ok(kind.build().generate(data)),
        OutputFormat::Json => render_json(data),
    }
}
