//! CLI for loading agencies and providers into the directory
//!
//! Outputs JSON so results can be piped into other tooling.

use std::path::PathBuf;

use anyhow::{Context, Result};
use childcare_core::config::Config;
use childcare_core::kernel::ServerDeps;
use childcare_core::seed::{self, DirectorySeed};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "seed_cli")]
#[command(about = "Load agencies and providers into the childcare directory")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a seed document (agencies with nested providers)
    Load { file: PathBuf },

    /// Print row counts for every table
    Counts,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let deps = ServerDeps::connect(&config).await?;
    deps.run_migrations().await?;

    let output = match cli.command {
        Commands::Load { file } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let document: DirectorySeed =
                serde_json::from_str(&raw).context("Seed file is not a valid seed document")?;
            let summary = seed::load(&document, &deps.db_pool)
                .await
                .context("Failed to load seed")?;
            serde_json::to_string_pretty(&summary)?
        }
        Commands::Counts => {
            let counts = seed::counts(&deps.db_pool)
                .await
                .context("Failed to count rows")?;
            serde_json::to_string_pretty(&counts)?
        }
    };

    println!("{output}");

    Ok(())
}
