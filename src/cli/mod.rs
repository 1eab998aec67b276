pub mod commands;
pub mod report;

pub use commands::Cli;
