use super::types::LogReportError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub exit_code: i32,
}

impl LogReportError {
    /// Classify this error into a stable type name and the process exit code
    /// it maps to when it reaches `main`.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            LogReportError::FileNotFound(_) => ErrorClassification {
                error_type: "FileNotFoundError",
                exit_code: 1,
            },
            LogReportError::SourceUnavailable { .. } => ErrorClassification {
                error_type: "SourceUnavailableError",
                exit_code: 1,
            },
            LogReportError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                exit_code: 2,
            },
            LogReportError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                exit_code: 2,
            },
            LogReportError::Io(_) => ErrorClassification {
                error_type: "IoError",
                exit_code: 1,
            },
            LogReportError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                exit_code: 1,
            },
            LogReportError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                exit_code: 70,
            },
        }
    }
}
