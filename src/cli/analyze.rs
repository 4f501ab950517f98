//! Analyze command - resolve config, run the pass, write the report

use super::Cli;
use anyhow::{Context, Result};
use console::style;
use logstat::config::{
    load_project_config, load_toml_config, process_env, resolve, ConfigInputs, ProjectConfig,
};
use logstat::pipeline::analyze_file;
use logstat::reporters::{report, write_report};
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let project = match &cli.config {
        Some(path) => load_toml_config(path)?,
        None => load_cwd_config(),
    };

    let inputs = ConfigInputs {
        log: cli.log,
        level: cli.level,
        output: cli.output,
        format: cli.format,
        locale: cli.locale,
        workers: cli.workers,
    };
    let config = resolve(&inputs, process_env, &project.defaults)?;

    let state = analyze_file(&config.log_path, config.pass_options())
        .context("Log analysis failed")?;

    let rendered = report(&state, config.format, &config.labels())?;
    write_report(&rendered, config.output.as_deref()).context("Failed to output report")?;

    if let Some(out_path) = &config.output {
        eprintln!("Report written to: {}", style(out_path.display()).cyan());
    }

    Ok(())
}

fn load_cwd_config() -> ProjectConfig {
    match std::env::current_dir() {
        Ok(dir) => load_project_config(&dir),
        Err(e) => {
            tracing::warn!("Cannot determine working directory: {}", e);
            load_project_config(Path::new("."))
        }
    }
}
