//! Salary survey command-line driver.
//!
//! Surveys the configured languages on hh.ru and SuperJob and prints one
//! comparison table per site. Logs go to stderr so stdout carries only the
//! reports.

mod app;
mod args;
mod report;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

/// Initialize tracing subscriber for logging
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,survey=info,salary_survey=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = args::Cli::parse();
    init_tracing();

    debug!("Starting salary-survey v{}", env!("CARGO_PKG_VERSION"));

    app::run(cli).await
}
