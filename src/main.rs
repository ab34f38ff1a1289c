use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;

use talentlens::cli::{self, Cli};
use talentlens::config::AppConfig;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to a file so they never interleave with rendered output.
    let log_path = std::env::temp_dir().join("talentlens.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::from_default_env()
                .add_directive("info".parse().context("Invalid log directive")?),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    cli::run(cli, config).await
}
