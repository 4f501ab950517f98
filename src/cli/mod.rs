//! CLI definitions and handler

mod analyze;

use anyhow::Result;
use clap::Parser;
use logstat::config::MAX_WORKERS;
use logstat::reporters::{Locale, OutputFormat};
use std::path::PathBuf;

/// Parse and validate workers count (1-64)
fn parse_workers(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("workers must be at least 1".to_string())
    } else if n > MAX_WORKERS {
        Err(format!("workers cannot exceed {}", MAX_WORKERS))
    } else {
        Ok(n)
    }
}

/// Validate `--format` with the same rules as the config layers.
/// An empty value is kept so it can fall through to the next layer.
fn parse_format(s: &str) -> Result<String, String> {
    if !s.trim().is_empty() {
        s.parse::<OutputFormat>().map_err(|e| e.to_string())?;
    }
    Ok(s.to_string())
}

/// Validate `--locale`, empty allowed
fn parse_locale(s: &str) -> Result<String, String> {
    if !s.trim().is_empty() {
        s.parse::<Locale>().map_err(|e| e.to_string())?;
    }
    Ok(s.to_string())
}

/// logstat - severity statistics for log files
#[derive(Parser, Debug)]
#[command(name = "logstat")]
#[command(
    version,
    about = "Count log lines per severity and print a summary",
    long_about = "logstat reads a line-oriented log file where each line looks like \
`<SEVERITY> <message>`, counts lines per severity at or above a minimum level, \
and prints a summary.\n\n\
Lines without a leading token are counted as INFO. Unknown tokens are kept as \
their own categories.\n\n\
Empty flags fall back to LOG_FILE_PATH, DETAIL_LEVEL and OUTPUT_FILE, then to \
the [defaults] table of logstat.toml.",
    after_help = "\
Examples:
  logstat --log app.log                        Summary of all lines
  logstat --log app.log --level warning        Only WARNING and ERROR counts
  logstat --log app.log -o report.txt          Write the summary to a file
  logstat --log app.log --format json          JSON output for scripting
  LOG_FILE_PATH=app.log logstat                Log path from the environment"
)]
pub struct Cli {
    /// Path to the log file [env: LOG_FILE_PATH]
    #[arg(long)]
    pub log: Option<String>,

    /// Minimum detail level: error, warning, info (case-insensitive) [env: DETAIL_LEVEL]
    #[arg(long)]
    pub level: Option<String>,

    /// Report file path (default: stdout) [env: OUTPUT_FILE]
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Output format: text, json (case-insensitive)
    #[arg(long, short = 'f', value_parser = parse_format)]
    pub format: Option<String>,

    /// Report label language: ru, en (case-insensitive)
    #[arg(long, value_parser = parse_locale)]
    pub locale: Option<String>,

    /// Number of parallel workers (1-64)
    #[arg(long, value_parser = parse_workers)]
    pub workers: Option<usize>,

    /// Project config file (default: ./logstat.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Diagnostic log level (error, warn, info, debug, trace)
    #[arg(
        long,
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    pub log_level: String,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    analyze::run(cli)
}
