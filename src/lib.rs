//! logstat - severity statistics for line-oriented log files
//!
//! Each input line is classified by its leading token (`ERROR`, `WARNING`,
//! `INFO`, or any other word), counted when it reaches the minimum level,
//! and summarized as a text or JSON report.
//!
//! ```rust,ignore
//! use logstat::pipeline::{run, PassOptions};
//! use logstat::models::Severity;
//!
//! let options = PassOptions { min_severity: Severity::Warning, workers: 1 };
//! let state = run("ERROR disk full\nINFO ready\n".as_bytes(), options)?;
//! assert_eq!(state.total_lines_seen, 2);
//! ```

pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod reporters;

pub use aggregator::LogAggregator;
pub use classifier::classify;
pub use error::{AnalysisError, AnalysisResult};
pub use models::{AggregationState, LogEntry, Severity, SeverityTag};
