use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use perennial::config::{self, Backend};
use perennial::{cli, server};

#[derive(Parser)]
#[command(name = "perennial", version, about = "Perennial wisdom quotes over JSON and HTML")]
struct Cli {
    /// Config file (default: ~/.perennial/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the storage backend
    #[arg(long, global = true)]
    backend: Option<Backend>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Seed storage if needed and start the HTTP server
    Serve {
        /// Override the listen port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Seed storage with the reference dataset (no-op when already seeded)
    Seed,
    /// Show row counts
    Stats,
    /// Validate the reference dataset and database health
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::WisdomConfig::load_from(path)?,
        None => config::WisdomConfig::load()?,
    };
    if let Some(backend) = cli.backend {
        config.storage.backend = backend;
    }

    // Logs go to stderr so stdout stays clean for command output.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            server::serve(config).await?;
        }
        Command::Seed => {
            cli::seed(&config)?;
        }
        Command::Stats => cli::stats::stats(&config)?,
        Command::Check => cli::check::check(&config)?,
    }

    Ok(())
}
