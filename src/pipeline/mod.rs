//! Single-pass analysis driver
//!
//! Pulls lines from a `BufRead` source, classifies them and feeds the
//! aggregator. With more than one worker, lines are read sequentially in
//! batches and each batch is classified and ingested on a rayon pool.
//!
//! Lines are read as raw bytes, so invalid UTF-8 is replaced rather than
//! rejected. End of input ends the pass; any I/O error aborts it and no
//! partial state is returned.

use crate::aggregator::LogAggregator;
use crate::classifier::classify;
use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{AggregationState, Severity};
use rayon::prelude::*;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Lines handed to the pool per parallel step
pub const BATCH_SIZE: usize = 4096;

/// Analysis parameters, fully resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassOptions {
    pub min_severity: Severity,
    pub workers: usize,
}

impl Default for PassOptions {
    fn default() -> Self {
        Self {
            min_severity: Severity::Info,
            workers: 1,
        }
    }
}

/// Open `path` and run a pass over it
pub fn analyze_file(path: &Path, options: PassOptions) -> AnalysisResult<AggregationState> {
    let file = File::open(path).map_err(|source| AnalysisError::SourceOpen {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Opened log file {}", path.display());

    let state = pass(BufReader::new(file), options, Some(path))?;

    info!(
        "Analyzed {}: {} lines, {} counted at {} and above",
        path.display(),
        state.total_lines_seen,
        state.counted(),
        options.min_severity
    );
    Ok(state)
}

/// Run a pass over any line source
pub fn run<R: BufRead>(source: R, options: PassOptions) -> AnalysisResult<AggregationState> {
    pass(source, options, None)
}

fn pass<R: BufRead>(
    mut source: R,
    options: PassOptions,
    path: Option<&Path>,
) -> AnalysisResult<AggregationState> {
    let aggregator = LogAggregator::new();

    if options.workers > 1 {
        run_parallel(source, &aggregator, options, path)?;
    } else {
        let mut buf = Vec::new();
        while let Some(line) = next_line(&mut source, &mut buf, path)? {
            aggregator.ingest(classify(&line), options.min_severity);
        }
    }

    Ok(aggregator.into_state())
}

fn run_parallel<R: BufRead>(
    mut source: R,
    aggregator: &LogAggregator,
    options: PassOptions,
    path: Option<&Path>,
) -> AnalysisResult<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.workers)
        .build()?;
    debug!(
        "Parallel pass with {} workers, batch size {}",
        options.workers, BATCH_SIZE
    );

    let mut buf = Vec::new();
    let mut batch: Vec<String> = Vec::with_capacity(BATCH_SIZE);
    let mut exhausted = false;
    while !exhausted {
        batch.clear();
        while batch.len() < BATCH_SIZE {
            match next_line(&mut source, &mut buf, path)? {
                Some(line) => batch.push(line.into_owned()),
                None => {
                    exhausted = true;
                    break;
                }
            }
        }

        pool.install(|| {
            batch
                .par_iter()
                .for_each(|line| aggregator.ingest(classify(line), options.min_severity));
        });
    }
    Ok(())
}

/// Read one raw line, line ending included. Invalid UTF-8 is replaced, not rejected.
fn next_line<'a, R: BufRead>(
    source: &mut R,
    buf: &'a mut Vec<u8>,
    path: Option<&Path>,
) -> AnalysisResult<Option<Cow<'a, str>>> {
    buf.clear();
    let read = source
        .read_until(b'\n', buf)
        .map_err(|source| read_error(source, path))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(buf)))
}

fn read_error(source: io::Error, path: Option<&Path>) -> AnalysisError {
    match path {
        Some(path) => AnalysisError::SourceRead {
            path: path.to_path_buf(),
            source,
        },
        None => AnalysisError::StreamRead(source),
    }
}
