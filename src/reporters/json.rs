//! JSON reporter
//!
//! Outputs `{"counts": {...}, "total": n}` as pretty-printed JSON.
//! Useful for piping to jq or further processing.

use crate::error::AnalysisResult;
use crate::models::AggregationState;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
struct JsonSummary<'a> {
    counts: BTreeMap<&'a str, u64>,
    total: u64,
}

/// Render the summary as JSON
pub fn render(state: &AggregationState) -> AnalysisResult<String> {
    let summary = JsonSummary {
        counts: state
            .counts_by_severity
            .iter()
            .map(|(tag, count)| (tag.as_str(), *count))
            .collect(),
        total: state.total_lines_seen,
    };
    let mut out = serde_json::to_string_pretty(&summary)?;
    out.push('\n');
    Ok(out)
}
