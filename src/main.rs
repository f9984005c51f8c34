//! Command line entry point: extract breeders and strains from a SQLite dump.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use strain_dump_extract::config::{
    DEFAULT_BREEDERS_OUTPUT, DEFAULT_INPUT, DEFAULT_PROGRESS_INTERVAL, DEFAULT_STRAINS_OUTPUT,
};
use strain_dump_extract::{ExtractConfig, run};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "strain-dump-extract")]
#[command(about = "Extract breeders and strains from a SQLite dump into CSV files")]
struct Cli {
    /// SQLite text dump to read
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Output CSV for breeders
    #[arg(long, default_value = DEFAULT_BREEDERS_OUTPUT)]
    breeders_output: PathBuf,
    /// Output CSV for strains
    #[arg(long, default_value = DEFAULT_STRAINS_OUTPUT)]
    strains_output: PathBuf,
    /// Log progress every N lines (0 disables)
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    progress_interval: usize,
}

impl From<Cli> for ExtractConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            breeders_output: cli.breeders_output,
            strains_output: cli.strains_output,
            progress_interval: cli.progress_interval,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ExtractConfig::from(Cli::parse());

    match run(&config) {
        Ok(summary) => {
            tracing::info!("Data extraction completed!");
            tracing::info!(
                "  - {}: {} records",
                config.breeders_output.display(),
                summary.breeders
            );
            tracing::info!(
                "  - {}: {} records",
                config.strains_output.display(),
                summary.strains
            );
            tracing::info!(
                lines = summary.lines,
                statements = summary.statements,
                skipped_rows = summary.skipped_rows,
                unknown_tables = summary.unknown_tables,
                unbalanced_rows = summary.unbalanced_rows,
                timestamp_fallbacks = summary.timestamp_fallbacks,
                strains_with_flowering_days = summary.strains_with_flowering_days,
                "Summary"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
