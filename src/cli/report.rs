use std::path::PathBuf;
use crate::cli::commands::Cli;
use crate::config::{parse_config, LogReportConfig};
use crate::errors::LogReportError;
use crate::pipeline::{default_workers, run_extraction, FileFailure};
use crate::reporting::{render, OutputFormat, ReportKind};
use tracing::info;

/// Effective settings after merging command-line flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub files: Vec<PathBuf>,
    pub report: ReportKind,
    pub format: OutputFormat,
    pub workers: usize,
}

/// Rendered report plus the files that could not be processed.
#[derive(Debug)]
pub struct ReportRun {
    pub output: String,
    pub failures: Vec<FileFailure>,
}

pub fn resolve_settings(cli: &Cli, config: &LogReportConfig) -> Result<Settings, LogReportError> {
    let report = cli.report.or(config.report).ok_or_else(|| {
        LogReportError::Config("no report selected; pass --report handlers".into())
    })?;
    let workers = cli.workers.or(config.workers).unwrap_or_else(default_workers);
    if workers == 0 {
        return Err(LogReportError::Config("workers must be at least 1".into()));
    }

    Ok(Settings {
        files: cli.files.clone(),
        report,
        format: cli.format.or(config.format).unwrap_or_default(),
        workers,
    })
}

/// Every input must be an existing regular file before any work starts.
pub fn check_files(files: &[PathBuf]) -> Result<(), LogReportError> {
    match files.iter().find(|path| !path.is_file()) {
        Some(missing) => Err(LogReportError::FileNotFound(missing.clone())),
        None => Ok(()),
    }
}

pub async fn run(settings: &Settings) -> Result<ReportRun, LogReportError> {
    check_files(&settings.files)?;

    let mut outcome = run_extraction(&settings.files, settings.workers).await;
    let failures = std::mem::take(&mut outcome.failures);
    let data = outcome.aggregate();

    info!(report = ?settings.report, handlers = data.len(), "Rendering report");
    let output = render(settings.report, settings.format, &data)?;
    Ok(ReportRun { output, failures })
}

pub async fn handle_report(cli: Cli) -> Result<(), LogReportError> {
    let config = match &cli.config {
        Some(path) => parse_config(path).await?,
        None => LogReportConfig::default(),
    };
    let settings = resolve_settings(&cli, &config)?;

    let ReportRun { output, failures } = run(&settings).await?;
    for failure in &failures {
        eprintln!("Error processing {}: {}", failure.path.display(), failure.error);
    }
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("logreport").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = LogReportConfig {
            workers: Some(8),
            report: Some(ReportKind::Handlers),
            format: Some(OutputFormat::Json),
        };
        let settings = resolve_settings(&cli(&["a.log", "-w", "2", "-f", "text"]), &config).unwrap();
        assert_eq!(settings.workers, 2);
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.report, ReportKind::Handlers);
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let config = LogReportConfig {
            workers: Some(3),
            report: Some(ReportKind::Handlers),
            format: None,
        };
        let settings = resolve_settings(&cli(&["a.log"]), &config).unwrap();
        assert_eq!(settings.workers, 3);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_report_is_required() {
        let err = resolve_settings(&cli(&["a.log"]), &LogReportConfig::default()).unwrap_err();
        assert!(matches!(err, LogReportError::Config(_)));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let result = resolve_settings(&cli(&["a.log", "-r", "handlers", "-w", "0"]), &LogReportConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_check_files_reports_first_missing() {
        let files = vec![PathBuf::from("/nonexistent/one.log"), PathBuf::from("/nonexistent/two.log")];
        match check_files(&files) {
            Err(LogReportError::FileNotFound(path)) => assert_eq!(path, files[0]),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }
}
