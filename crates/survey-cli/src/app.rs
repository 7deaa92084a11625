use crate::args::{Cli, SourceSelection};
use crate::report::ReportSink;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use survey_aggregator::SalaryAggregator;
use survey_core::{AppConfig, StatsTable, SuperJobToken};
use survey_sources::{HhSource, ListingSource, SuperJobSource};

/// Load configuration and credentials, survey the selected sources and print
/// one report per source.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match load_env_file(cli.env_file.as_deref()) {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) => tracing::debug!("No env file loaded: {}", e),
    }

    let mut config = AppConfig::load_with_env(cli.config.as_deref())
        .context("Failed to load configuration")?;
    apply_cli_overrides(&mut config, &cli)?;

    // Checked before any request is made
    let token = if cli.source.includes_superjob() {
        Some(SuperJobToken::from_env().context("Failed to load SuperJob application key")?)
    } else {
        None
    };

    let sink = cli.format.sink();
    let reports = collect_reports(&config, cli.source, token, sink.as_ref()).await?;

    write_reports(&mut std::io::stdout().lock(), &reports)?;
    Ok(())
}

/// Load `path`, or the nearest `.env` walking up from the current directory.
fn load_env_file(path: Option<&Path>) -> dotenvy::Result<PathBuf> {
    match path {
        Some(path) => dotenvy::from_filename(path),
        None => dotenvy::dotenv(),
    }
}

fn apply_cli_overrides(config: &mut AppConfig, cli: &Cli) -> survey_core::Result<()> {
    if !cli.languages.is_empty() {
        config.general.languages.clone_from(&cli.languages);
    }
    if let Some(limit) = cli.concurrency {
        config.http.max_concurrent_languages = limit;
    }
    config.validate()?;
    Ok(())
}

/// Survey each selected source and render its table.
///
/// Every source is fully surveyed before anything is returned, so a failure
/// leaves nothing half printed.
pub(crate) async fn collect_reports(
    config: &AppConfig,
    selection: SourceSelection,
    token: Option<SuperJobToken>,
    sink: &dyn ReportSink,
) -> Result<Vec<String>> {
    let mut reports = Vec::new();

    if selection.includes_hh() {
        let source = HhSource::new(&config.hh, &config.http)?;
        let table = survey(Arc::new(source), config).await?;
        reports.push(sink.render(&config.hh.title, &table));
    }

    if selection.includes_superjob() {
        let token = token.context("SuperJob selected without an application key")?;
        let source = SuperJobSource::new(&config.superjob, &config.http, token)?;
        let table = survey(Arc::new(source), config).await?;
        reports.push(sink.render(&config.superjob.title, &table));
    }

    Ok(reports)
}

async fn survey<S>(source: Arc<S>, config: &AppConfig) -> Result<StatsTable>
where
    S: ListingSource,
{
    let table = SalaryAggregator::new(source)
        .with_max_concurrent_languages(config.http.max_concurrent_languages)
        .aggregate(&config.general.languages)
        .await?;
    Ok(table)
}

fn write_reports(out: &mut impl Write, reports: &[String]) -> survey_core::Result<()> {
    for report in reports {
        writeln!(out, "{report}")?;
    }
    out.flush()?;
    Ok(())
}
