use clap::Parser;
use logreport::{cli, errors};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // stdout carries the report, so diagnostics go to stderr and stay quiet by default
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::report::handle_report(cli).await {
        eprintln!("Error: {}", e);
        let classification: errors::ErrorClassification = e.classify();
        tracing::debug!(error_type = classification.error_type, "Exiting with error");
        std::process::exit(classification.exit_code);
    }
}
