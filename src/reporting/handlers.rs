use crate::models::{HandlerCounts, Level, LevelCounts};
use super::Report;

const HANDLER_WIDTH: usize = 22;
const LEVEL_WIDTH: usize = 7;

/// Per-endpoint table: one row per handler in path order, one column per
/// level, and a closing row of per-level totals.
#[derive(Debug, Default, Clone, Copy)]
pub struct HandlersReport;

impl Report for HandlersReport {
    fn name(&self) -> &'static str {
        "handlers"
    }

    fn generate(&self, data: &HandlerCounts) -> String {
        let mut totals = LevelCounts::new();
        let mut handlers: Vec<&String> = data.keys().collect();
        handlers.sort();

        let mut rows = Vec::with_capacity(handlers.len());
        for handler in handlers {
            let counts = &data[handler];
            let mut row = format!("{:<width$}", handler, width = HANDLER_WIDTH);
            row.push_str(&level_columns(counts.iter().map(|(_, count)| count)));
            totals += counts;
            rows.push(row);
        }

        let mut total_row = " ".repeat(HANDLER_WIDTH);
        total_row.push_str(&level_columns(totals.iter().map(|(_, count)| count)));

        let mut header = format!("Total requests: {}\n\n", totals.total());
        header.push_str(&format!("{:<width$}", "HANDLER", width = HANDLER_WIDTH));
        header.push_str(&level_columns(Level::ALL.iter().map(|l| l.as_str())));

        format!("{}\n{}\n{}", header, rows.join("\n"), total_row)
    }
}

fn level_columns<T: std::fmt::Display>(values: impl Iterator<Item = T>) -> String {
    values
        .map(|v| format!("\t{:<width$}", v, width = LEVEL_WIDTH))
        .collect()
}
