use clap::Parser;
use std::path::PathBuf;
use crate::reporting::{OutputFormat, ReportKind};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "logreport",
    version,
    long_version = LONG_VERSION,
    about = "Summarize django.request log files per endpoint and severity"
)]
pub struct Cli {
    /// Log files to analyze
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Report to generate
    #[arg(short, long, value_enum)]
    pub report: Option<ReportKind>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Max files processed in parallel (defaults to available cores)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
