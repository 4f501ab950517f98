//! Output reporters for logstat summaries
//!
//! Supports multiple output formats:
//! - `text` - Header, one `<SEVERITY>: <count>` line per category, total line
//! - `json` - Machine-readable JSON

mod json;
mod text;

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::AggregationState;
use anyhow::anyhow;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Label language for the text report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ru" => Ok(Locale::Ru),
            "en" => Ok(Locale::En),
            _ => Err(anyhow!("Unknown locale '{}'. Valid locales: ru, en", s)),
        }
    }
}

/// Fixed labels framing the per-severity lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLabels {
    pub header: &'static str,
    pub total: &'static str,
}

impl ReportLabels {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Ru => Self {
                header: "Статистика по сообщениям:",
                total: "Всего сообщений",
            },
            Locale::En => Self {
                header: "Message statistics:",
                total: "Total messages",
            },
        }
    }
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

/// Render a summary in the given format
pub fn report(
    state: &AggregationState,
    format: OutputFormat,
    labels: &ReportLabels,
) -> AnalysisResult<String> {
    match format {
        OutputFormat::Text => Ok(text::render(state, labels)),
        OutputFormat::Json => json::render(state),
    }
}

/// Write a rendered report to a freshly created file, or stdout when `path` is `None`
pub fn write_report(rendered: &str, path: Option<&Path>) -> AnalysisResult<()> {
    match path {
        Some(path) => {
            let mut file =
                File::create(path).map_err(|source| AnalysisError::DestinationCreate {
                    path: path.to_path_buf(),
                    source,
                })?;
            file.write_all(rendered.as_bytes())?;
            file.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}
