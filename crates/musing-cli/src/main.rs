use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use musing_infrastructure::ConfigService;
use tracing_subscriber::EnvFilter;

mod commands;
mod dialogs;

#[derive(Parser)]
#[command(name = "musing")]
#[command(about = "Musing CLI - a journal with AI persona reactions", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Answer yes to every confirmation
    #[arg(long, short = 'y', global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the default personas
    Personas,
    /// Show journal entries from a seed file
    Journal {
        /// JSON file with `entries` and optional `categories`
        #[arg(long)]
        seed: PathBuf,
        /// Only show entries in this category ("all" for every category)
        #[arg(long, default_value = "all")]
        category: String,
        /// Number of entries to show (must be a configured page size)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Check an avatar image and convert it to a data URL
    Avatar {
        path: PathBuf,
    },
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new().context("Failed to resolve config path")?,
    };
    let config = config_service
        .get_config()
        .with_context(|| format!("Failed to load {}", config_service.path().display()))?;
    init_tracing(&config.log_level);

    let dialogs = dialogs::TerminalDialogs::new(cli.yes);

    match cli.command {
        Commands::Personas => commands::personas::list(&config, dialogs).await?,
        Commands::Journal {
            seed,
            category,
            limit,
        } => commands::journal::show(&config, dialogs, &seed, &category, limit).await?,
        Commands::Avatar { path } => commands::avatar::check(&config, dialogs, &path).await?,
    }

    Ok(())
}
