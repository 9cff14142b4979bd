//! weekly-report - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use weekly_report::app::{RunContext, run};
use weekly_report::config::CONFIG_FILE_NAME;
use weekly_report::git::RepoConfigIdentity;
use weekly_report::llm::HttpTransport;

/// Generate a weekly report from your git commits.
///
/// Reads `config.json` from the current directory and writes
/// `周报_<YYYY-MM-DD>.txt` next to it.
#[derive(Parser, Debug)]
#[command(name = "weekly-report")]
#[command(about = "Generate a weekly report from your git commits")]
#[command(version)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let identity = RepoConfigIdentity;
    let ctx = RunContext {
        config_path: PathBuf::from(CONFIG_FILE_NAME),
        output_dir: cwd,
        identity: &identity,
        now: Local::now(),
    };

    run(&ctx, |config| HttpTransport::new(config.request_timeout))
        .await
        .context("Failed to generate weekly report")?;

    Ok(())
}
