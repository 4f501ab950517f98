//! Severity count aggregation
//!
//! `LogAggregator` owns the per-run `AggregationState`. Counts and the line
//! total live behind a single lock, so concurrent `ingest` calls never see a
//! total that disagrees with the counts.

use crate::models::{AggregationState, LogEntry, Severity};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
pub struct LogAggregator {
    state: Mutex<AggregationState>,
}

impl LogAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one consumed line.
    ///
    /// The total always increments; the per-severity count only when the
    /// entry passes `min_severity`.
    pub fn ingest(&self, entry: LogEntry, min_severity: Severity) {
        let mut state = self.lock();
        state.total_lines_seen += 1;
        if entry.severity.passes(min_severity) {
            *state.counts_by_severity.entry(entry.severity).or_insert(0) += 1;
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> AggregationState {
        self.lock().clone()
    }

    pub fn into_state(self) -> AggregationState {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // Each update leaves the state consistent, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, AggregationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::models::SeverityTag;
    use std::sync::Arc;

    const SAMPLE: [&str; 4] = [
        "ERROR disk full",
        "INFO starting up",
        "WARNING low memory",
        "INFO ready",
    ];

    fn aggregate(lines: &[&str], min: Severity) -> AggregationState {
        let aggregator = LogAggregator::new();
        for line in lines {
            aggregator.ingest(classify(line), min);
        }
        aggregator.into_state()
    }

    #[test]
    fn test_counts_everything_at_info() {
        let state = aggregate(&SAMPLE, Severity::Info);
        assert_eq!(state.total_lines_seen, 4);
        assert_eq!(state.count(&Severity::Error.into()), 1);
        assert_eq!(state.count(&Severity::Info.into()), 2);
        assert_eq!(state.count(&Severity::Warning.into()), 1);
        assert_eq!(state.counts_by_severity.len(), 3);
        assert_eq!(state.counted(), state.total_lines_seen);
    }

    #[test]
    fn test_error_threshold() {
        let state = aggregate(&SAMPLE, Severity::Error);
        assert_eq!(state.total_lines_seen, 4);
        assert_eq!(state.counts_by_severity.len(), 1);
        assert_eq!(state.count(&Severity::Error.into()), 1);
    }

    #[test]
    fn test_warning_threshold() {
        let state = aggregate(&SAMPLE, Severity::Warning);
        assert_eq!(state.counts_by_severity.len(), 2);
        assert_eq!(state.count(&Severity::Warning.into()), 1);
        assert_eq!(state.count(&Severity::Info.into()), 0);
    }

    #[test]
    fn test_threshold_above_all_entries() {
        let state = aggregate(&["INFO a", "INFO b", "plain"], Severity::Warning);
        assert!(state.counts_by_severity.is_empty());
        assert_eq!(state.total_lines_seen, 3);
    }

    #[test]
    fn test_unknown_tags_form_their_own_category() {
        let state = aggregate(&["TRACE x", "TRACE y", "ERROR z"], Severity::Info);
        assert_eq!(state.count(&SeverityTag::Other("TRACE".into())), 2);
        assert_eq!(state.counted(), 3);

        let state = aggregate(&["TRACE x", "TRACE y", "ERROR z"], Severity::Warning);
        assert_eq!(state.count(&SeverityTag::Other("TRACE".into())), 0);
        assert_eq!(state.counted(), 1);
        assert_eq!(state.total_lines_seen, 3);
    }

    #[test]
    fn test_rerun_is_deterministic() {
        assert_eq!(
            aggregate(&SAMPLE, Severity::Info),
            aggregate(&SAMPLE, Severity::Info)
        );
    }

    #[test]
    fn test_concurrent_ingest_keeps_totals_consistent() {
        let aggregator = Arc::new(LogAggregator::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let aggregator = Arc::clone(&aggregator);
                std::thread::spawn(move || {
                    for i in 0..1000 {
                        let line = if i % 2 == 0 { "ERROR boom" } else { "INFO ok" };
                        aggregator.ingest(classify(line), Severity::Warning);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let state = aggregator.snapshot();
        assert_eq!(state.total_lines_seen, 8000);
        assert_eq!(state.count(&Severity::Error.into()), 4000);
        assert_eq!(state.count(&Severity::Info.into()), 0);
    }
}
