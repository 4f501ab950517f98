//! Configuration resolution
//!
//! Every setting is taken from the first non-empty layer:
//! command-line flag, then environment variable, then project config,
//! then the built-in default.

use super::CliDefaults;
use crate::error::AnalysisError;
use crate::models::Severity;
use crate::pipeline::PassOptions;
use crate::reporters::{Locale, OutputFormat, ReportLabels};
use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

pub const ENV_LOG_FILE: &str = "LOG_FILE_PATH";
pub const ENV_DETAIL_LEVEL: &str = "DETAIL_LEVEL";
pub const ENV_OUTPUT_FILE: &str = "OUTPUT_FILE";

pub const DEFAULT_LEVEL: &str = "INFO";
pub const MAX_WORKERS: usize = 64;

/// Raw values as given on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigInputs {
    pub log: Option<String>,
    pub level: Option<String>,
    pub output: Option<String>,
    pub format: Option<String>,
    pub locale: Option<String>,
    pub workers: Option<usize>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub log_path: PathBuf,
    pub min_severity: Severity,
    /// `None` writes to stdout
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub locale: Locale,
    pub workers: usize,
}

impl ResolvedConfig {
    pub fn pass_options(&self) -> PassOptions {
        PassOptions {
            min_severity: self.min_severity,
            workers: self.workers,
        }
    }

    pub fn labels(&self) -> ReportLabels {
        ReportLabels::for_locale(self.locale)
    }
}

/// Resolve settings from the CLI, an environment lookup, and project defaults
pub fn resolve<F>(
    inputs: &ConfigInputs,
    env: F,
    defaults: &CliDefaults,
) -> Result<ResolvedConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let log_path = first_set([inputs.log.clone(), env(ENV_LOG_FILE)])
        .map(PathBuf::from)
        .ok_or(AnalysisError::MissingLogPath)?;

    let level = first_set([
        inputs.level.clone(),
        env(ENV_DETAIL_LEVEL),
        defaults.level.clone(),
    ])
    .unwrap_or_else(|| DEFAULT_LEVEL.to_string());
    let min_severity: Severity = level.parse()?;

    let output = first_set([
        inputs.output.clone(),
        env(ENV_OUTPUT_FILE),
        defaults.output.clone(),
    ])
    .map(PathBuf::from);

    let format: OutputFormat = match first_set([inputs.format.clone(), defaults.format.clone()]) {
        Some(format) => format.parse()?,
        None => OutputFormat::default(),
    };

    let locale: Locale = match first_set([inputs.locale.clone(), defaults.locale.clone()]) {
        Some(locale) => locale.parse()?,
        None => Locale::default(),
    };

    let workers = inputs.workers.or(defaults.workers).unwrap_or(1);
    if workers == 0 || workers > MAX_WORKERS {
        anyhow::bail!("workers must be between 1 and {}, got {}", MAX_WORKERS, workers);
    }

    let resolved = ResolvedConfig {
        log_path,
        min_severity,
        output,
        format,
        locale,
        workers,
    };
    debug!("Resolved config: {:?}", resolved);
    Ok(resolved)
}

/// Environment lookup backed by the process environment
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// First value that is present and not blank
fn first_set<const N: usize>(layers: [Option<String>; N]) -> Option<String> {
    layers
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}
