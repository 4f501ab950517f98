//! Configuration module for logstat
//!
//! This module handles:
//! - Project-level configuration (logstat.toml)
//! - Flag / environment / project / default layering

mod project_config;
mod resolve;

pub use project_config::{
    load_project_config, load_toml_config, CliDefaults, ProjectConfig, CONFIG_FILE_NAME,
};
pub use resolve::{
    process_env, resolve, ConfigInputs, ResolvedConfig, DEFAULT_LEVEL, ENV_DETAIL_LEVEL,
    ENV_LOG_FILE, ENV_OUTPUT_FILE, MAX_WORKERS,
};
