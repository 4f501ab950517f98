//! Project-level configuration support
//!
//! Loads defaults from `logstat.toml` in the working directory, or from an
//! explicit `--config` path.
//!
//! # Configuration Format
//!
//! ```toml
//! # logstat.toml
//!
//! [defaults]
//! level = "warning"    # minimum detail level (error, warning, info)
//! output = "report.txt"
//! format = "json"      # text, json
//! locale = "en"        # ru, en
//! workers = 4
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "logstat.toml";

/// Project configuration loaded from `logstat.toml`
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Default CLI values
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Default CLI flags that can be set in project config
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliDefaults {
    #[serde(default)]
    pub level: Option<String>,

    #[serde(default)]
    pub output: Option<String>,

    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub locale: Option<String>,

    #[serde(default)]
    pub workers: Option<usize>,
}

/// Load project configuration from `dir`.
///
/// A missing file yields defaults. A broken file is logged and also yields
/// defaults, so a stray config never blocks a run.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let toml_path = dir.join(CONFIG_FILE_NAME);
    if !toml_path.exists() {
        debug!("No project config found, using defaults");
        return ProjectConfig::default();
    }

    match load_toml_config(&toml_path) {
        Ok(config) => {
            debug!("Loaded project config from {}", toml_path.display());
            config
        }
        Err(e) => {
            warn!("Failed to load {}: {:#}", toml_path.display(), e);
            ProjectConfig::default()
        }
    }
}

/// Load configuration from an explicit TOML file. Errors are returned.
pub fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config file {}", path.display()))?;
    let config: ProjectConfig = toml::from_str(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config)
}
