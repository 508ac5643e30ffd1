use std::path::PathBuf;

use anyhow::{Context, Result};
use doi_analysis::{OutputFormat, ReportConfig, render_text, run_report};
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => ReportConfig::from_json_file(&path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ReportConfig::default(),
    };
    info!("{config}");

    let report = run_report(&config).context("Failed to build report")?;

    let output = match config.output {
        OutputFormat::Text => render_text(&report).context("Failed to render report")?,
        OutputFormat::Json => report.to_json().context("Failed to serialize report")?,
    };
    println!("{output}");

    Ok(())
}
