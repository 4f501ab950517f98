//! Plain text reporter
//!
//! ```text
//! Статистика по сообщениям:
//! ERROR: 1
//! WARNING: 1
//! INFO: 2
//! Всего сообщений: 4
//! ```
//!
//! No colors: the output is meant to be diffed and redirected.

use super::ReportLabels;
use crate::models::AggregationState;

/// Render the summary as text
pub fn render(state: &AggregationState, labels: &ReportLabels) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", labels.header));
    for (tag, count) in state.sorted_counts() {
        out.push_str(&format!("{}: {}\n", tag, count));
    }
    out.push_str(&format!("{}: {}\n", labels.total, state.total_lines_seen));

    out
}
