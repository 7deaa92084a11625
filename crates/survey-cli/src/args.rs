use clap::{Parser, ValueEnum, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Average programmer salaries per language from hh.ru and SuperJob")]
pub(crate) struct Cli {
    /// Path to a TOML config file (default: the user config directory)
    #[arg(long, value_hint = ValueHint::FilePath, env = "SALARY_SURVEY_CONFIG")]
    pub(crate) config: Option<PathBuf>,

    /// Path to environment file holding SJ_TOKEN (default: the nearest `.env`
    /// in the current directory or its parents)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub(crate) env_file: Option<PathBuf>,

    /// Language to survey; repeat to survey several. Replaces the configured list.
    #[arg(short, long = "language", value_name = "NAME")]
    pub(crate) languages: Vec<String>,

    /// Which listing sites to query
    #[arg(long, value_enum, default_value_t = SourceSelection::All)]
    pub(crate) source: SourceSelection,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub(crate) format: OutputFormat,

    /// Number of languages fetched at the same time
    #[arg(long, value_name = "N")]
    pub(crate) concurrency: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SourceSelection {
    /// hh.ru and SuperJob
    All,
    /// hh.ru only
    Hh,
    /// SuperJob only
    Superjob,
}

impl SourceSelection {
    pub(crate) fn includes_hh(self) -> bool {
        matches!(self, Self::All | Self::Hh)
    }

    pub(crate) fn includes_superjob(self) -> bool {
        matches!(self, Self::All | Self::Superjob)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// ASCII tables
    Table,
    /// One JSON document per source
    Json,
}
