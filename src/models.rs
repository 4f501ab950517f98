//! Core data models for logstat

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::AnalysisError;

/// Known severity levels
///
/// Variant order is the filtering rank: `Info < Warning < Error`.
/// Filtering never compares the textual form of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Error, Severity::Warning, Severity::Info];

    /// Numeric rank used for threshold comparison (higher = more severe)
    pub fn rank(self) -> u8 {
        match self {
            Severity::Info => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }

    /// Literal token as it appears in log lines
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }

    /// Exact, case-sensitive match against a log line token
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == token)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a configured threshold. Case-insensitive, surrounding whitespace ignored.
impl FromStr for Severity {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        Severity::from_token(&normalized)
            .ok_or_else(|| AnalysisError::InvalidLevel(s.to_string()))
    }
}

/// Severity category attached to a classified line.
///
/// Input is not validated: any leading token becomes a category of its own.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeverityTag {
    Known(Severity),
    Other(String),
}

impl SeverityTag {
    pub fn from_token(token: &str) -> Self {
        match Severity::from_token(token) {
            Some(severity) => SeverityTag::Known(severity),
            None => SeverityTag::Other(token.to_string()),
        }
    }

    /// Unrecognized tags rank alongside INFO
    pub fn rank(&self) -> u8 {
        match self {
            SeverityTag::Known(severity) => severity.rank(),
            SeverityTag::Other(_) => Severity::Info.rank(),
        }
    }

    pub fn passes(&self, min: Severity) -> bool {
        self.rank() >= min.rank()
    }

    pub fn as_str(&self) -> &str {
        match self {
            SeverityTag::Known(severity) => severity.as_str(),
            SeverityTag::Other(token) => token,
        }
    }
}

impl From<Severity> for SeverityTag {
    fn from(severity: Severity) -> Self {
        SeverityTag::Known(severity)
    }
}

impl std::fmt::Display for SeverityTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single classified log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub severity: SeverityTag,
    pub message: String,
}

/// Counts collected over one analysis run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationState {
    pub counts_by_severity: BTreeMap<SeverityTag, u64>,
    pub total_lines_seen: u64,
}

impl AggregationState {
    /// Sum of all per-severity counts
    pub fn counted(&self) -> u64 {
        self.counts_by_severity.values().sum()
    }

    pub fn count(&self, tag: &SeverityTag) -> u64 {
        self.counts_by_severity.get(tag).copied().unwrap_or(0)
    }

    /// Entries ordered most severe first, ties broken by tag text
    pub fn sorted_counts(&self) -> Vec<(&SeverityTag, u64)> {
        let mut counts: Vec<_> = self
            .counts_by_severity
            .iter()
            .map(|(tag, count)| (tag, *count))
            .collect();
        counts.sort_by(|(a, _), (b, _)| {
            b.rank()
                .cmp(&a.rank())
                .then_with(|| a.as_str().cmp(b.as_str()))
        });
        counts
    }
}
