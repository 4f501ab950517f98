//! Error types for log analysis runs

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an analysis run
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("No log file given. Pass --log <PATH> or set LOG_FILE_PATH")]
    MissingLogPath,

    #[error("Unknown detail level '{0}'. Valid levels: ERROR, WARNING, INFO")]
    InvalidLevel(String),

    #[error("Failed to open log file {}: {source}", path.display())]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read log file {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read log input: {0}")]
    StreamRead(#[source] std::io::Error),

    #[error("Failed to create report file {}: {source}", path.display())]
    DestinationCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {0}")]
    ReportWrite(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
