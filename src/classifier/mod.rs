//! Line classification
//!
//! Splits a raw log line into a severity tag and a message body:
//!
//! ```text
//! ERROR disk full      -> tag "ERROR", message "disk full"
//! notice: rebooting    -> tag "notice:", message "rebooting"
//! standalone           -> tag INFO, message "standalone"
//! ```
//!
//! Tags are taken verbatim and are case-sensitive. No validation is done
//! against the known levels.

use crate::models::{LogEntry, Severity, SeverityTag};

/// Classify a single line. A trailing `\n` or `\r\n` is ignored.
pub fn classify(line: &str) -> LogEntry {
    let line = strip_line_ending(line);

    match line.split_once(char::is_whitespace) {
        Some((token, message)) if !token.is_empty() => LogEntry {
            severity: SeverityTag::from_token(token),
            message: message.to_string(),
        },
        _ => LogEntry {
            severity: SeverityTag::Known(Severity::Info),
            message: line.to_string(),
        },
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
