use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod collect;
mod discover;

#[derive(Debug, Parser)]
#[command(name = "repscan")]
#[command(about = "Consumer-complaint reputation collector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect indicators for every configured target.
    Collect {
        /// Targets file overriding REPSCAN_TARGETS_PATH.
        #[arg(long)]
        targets: Option<PathBuf>,
        /// Only collect targets from this source (reclame_aqui or consumidor_gov).
        #[arg(long)]
        source: Option<String>,
        /// List what would be collected without opening a browser.
        #[arg(long)]
        dry_run: bool,
    },
    /// Harvest company profile URLs from a Consumidor.gov listing page.
    Discover {
        /// Listing page URL.
        url: String,
        /// Stop after this many companies.
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let config = repscan_core::load_app_config()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Collect {
            targets,
            source,
            dry_run,
        } => collect::run_collect(&config, targets.as_deref(), source.as_deref(), dry_run),
        Commands::Discover { url, limit } => discover::run_discover(&config, &url, limit),
    }
}
