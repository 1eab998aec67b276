use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;
use crate::errors::LogReportError;
use crate::models::{HandlerCounts, Level};
use tracing::debug;

/// Substring a line must contain to be treated as a request record.
pub const REQUEST_MARKER: &str = "django.request";

/// A whole-word level name, then anything, then whitespace and a `/`-prefixed
/// token running to the next space. Group 2 is the endpoint path.
static HANDLER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let levels: Vec<&str> = Level::ALL.iter().map(|l| l.as_str()).collect();
    Regex::new(&format!(r"\b({})\b.*\s(/[^ ]*)", levels.join("|")))
        .expect("handler pattern is valid")
});

/// First level name occurring anywhere in `line`, scanning in severity order.
///
/// This is a plain substring search: `"INFORMATION"` yields `Info`, and a line
/// mentioning both `DEBUG` and `ERROR` yields `Debug` regardless of position.
pub fn detect_level(line: &str) -> Option<Level> {
    Level::ALL.into_iter().find(|level| line.contains(level.as_str()))
}

/// Extract the `(level, endpoint)` pair a line contributes, if any.
///
/// The counted level comes from [`detect_level`], not from the whole-word
/// level the pattern anchors on, so the two can disagree when a line carries
/// several level names.
pub fn classify_line(line: &str) -> Option<(Level, &str)> {
    if !line.contains(REQUEST_MARKER) {
        return None;
    }
    let level = detect_level(line)?;
    let captures = HANDLER_PATTERN.captures(line)?;
    let handler = captures.get(2)?.as_str();
    Some((level, handler))
}

/// Tally every request record read from `reader`. Lines that are not request
/// records are skipped; only read failures are errors.
pub fn process_reader<R: BufRead>(reader: R) -> io::Result<HandlerCounts> {
    let mut result = HandlerCounts::new();
    for line in reader.lines() {
        let line = line?;
        if let Some((level, handler)) = classify_line(&line) {
            result.entry(handler.to_string()).or_default().increment(level);
        }
    }
    Ok(result)
}

pub fn process_file(path: &Path) -> Result<HandlerCounts, LogReportError> {
    let file = File::open(path)
        .map_err(|e| LogReportError::source_unavailable(path, e))?;
    let result = process_reader(BufReader::new(file))
        .map_err(|e| LogReportError::source_unavailable(path, e))?;

    debug!(
        path = %path.display(),
        handlers = result.len(),
        records = result.values().map(|c| c.total()).sum::<u64>(),
        "Processed log file"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
2021-09-01 12:00:00,000 DEBUG django.request: \"GET /admin/dashboard/ HTTP/1.1\" extra info
2021-09-01 12:00:01,000 INFO django.request: \"POST /api/v1/auth/login/ HTTP/1.1\" request details
2021-09-01 12:00:02,000 WARNING django.request: \"GET /api/v1/orders/ HTTP/1.1\" warning
2021-09-01 12:00:03,000 ERROR django.request: \"PUT /api/v1/products/ HTTP/1.1\" failure
2021-09-01 12:00:04,000 CRITICAL django.request: \"DELETE /api/v1/shipping/ HTTP/1.1\" critical failure
2021-09-01 12:00:05,000 DEBUG django.request: \"GET /admin/dashboard/ HTTP/1.1\" more info
";

    #[test]
    fn test_sample_records() {
        let result = process_reader(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(result.len(), 5);
        assert_eq!(result["/admin/dashboard/"][Level::Debug], 2);
        assert_eq!(result["/admin/dashboard/"].total(), 2);
        assert_eq!(result["/api/v1/auth/login/"][Level::Info], 1);
        assert_eq!(result["/api/v1/orders/"][Level::Warning], 1);
        assert_eq!(result["/api/v1/products/"][Level::Error], 1);
        assert_eq!(result["/api/v1/shipping/"][Level::Critical], 1);
    }

    #[test]
    fn test_skips_lines_without_marker() {
        let line = "2021-09-01 12:00:00,000 INFO django.security: \"GET /admin/ HTTP/1.1\"";
        assert_eq!(classify_line(line), None);
    }

    #[test]
    fn test_skips_lines_without_level() {
        let line = "2021-09-01 12:00:00,000 NOTICE django.request: \"GET /admin/ HTTP/1.1\"";
        assert_eq!(classify_line(line), None);
    }

    #[test]
    fn test_skips_lines_without_path() {
        let line = "2021-09-01 12:00:00,000 ERROR django.request: connection reset";
        assert_eq!(classify_line(line), None);
    }

    #[test]
    fn test_internal_server_error_record() {
        let line = "2021-09-01 12:00:00,000 ERROR django.request: Internal Server Error: /api/v1/payments/ [192.168.1.5]";
        assert_eq!(classify_line(line), Some((Level::Error, "/api/v1/payments/")));
    }

    #[test]
    fn test_path_at_end_of_line() {
        let result = process_reader(Cursor::new(
            "t WARNING django.request: Not Found: /favicon.ico\r\n",
        ))
        .unwrap();
        assert_eq!(result["/favicon.ico"][Level::Warning], 1);
    }

    #[test]
    fn test_counted_level_is_first_in_severity_order() {
        // Whole-word match anchors on ERROR, but DEBUG is found first by the
        // substring scan and is the level that gets counted.
        let line = "t ERROR django.request: \"GET /api/v1/debug/ HTTP/1.1\" retry after DEBUG dump";
        assert_eq!(classify_line(line), Some((Level::Debug, "/api/v1/debug/")));
    }

    #[test]
    fn test_level_substring_counts_even_without_whole_word() {
        // "INFORMATIONAL" satisfies the substring scan but not the whole-word
        // pattern; CRITICAL supplies the anchor.
        let line = "t CRITICAL django.request: INFORMATIONAL \"GET /health/ HTTP/1.1\"";
        assert_eq!(classify_line(line), Some((Level::Info, "/health/")));

        let no_anchor = "t INFORMATIONAL django.request: \"GET /health/ HTTP/1.1\"";
        assert_eq!(classify_line(no_anchor), None);
    }

    #[test]
    fn test_last_path_token_wins() {
        let line = "t INFO django.request: \"GET /a/ HTTP/1.1\" referer /b/";
        assert_eq!(classify_line(line), Some((Level::Info, "/b/")));
    }

    #[test]
    fn test_process_file_missing() {
        let err = process_file(Path::new("/nonexistent/app.log")).unwrap_err();
        assert!(matches!(err, LogReportError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_read_failure() {
        let bytes: &[u8] = b"t INFO django.request: \"GET /a/ \xff\xfe HTTP/1.1\"\n";
        assert!(process_reader(Cursor::new(bytes)).is_err());
    }
}
