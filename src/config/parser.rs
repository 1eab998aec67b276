use std::path::Path;
use crate::errors::LogReportError;
use super::types::LogReportConfig;
use tracing::debug;

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<LogReportConfig, LogReportError> {
    if !path.exists() {
        return Err(LogReportError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(LogReportError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config = parse_config_str(&content)?;
    debug!(path = %path.display(), ?config, "Loaded config");
    Ok(config)
}

pub fn parse_config_str(content: &str) -> Result<LogReportConfig, LogReportError> {
    // An empty document deserializes to unit, not to an empty mapping
    if content.trim().is_empty() {
        return Ok(LogReportConfig::default());
    }
    let config: LogReportConfig = serde_yaml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &LogReportConfig) -> Result<(), LogReportError> {
    if config.workers == Some(0) {
        return Err(LogReportError::Config("workers must be at least 1".into()));
    }
    Ok(())
}
