//! CLI parser and dispatch.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "binfinder")]
#[command(about = "Compost bin directory and nearest-bin lookup service")]
#[command(version)]
pub struct Cli {
    /// Path to the bin dataset CSV (overrides BINFINDER_DATASET)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Bind address: a port, a host, or host:port
        #[arg(short, long, default_value = "3030")]
        bind: String,
    },

    /// List every bin in the dataset
    List,

    /// Find the bin nearest to a coordinate
    Nearest {
        /// Query latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Query longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::resolve(cli.dataset);

    match cli.command {
        Commands::Serve { bind } => commands::cmd_serve(&settings, &bind).await,
        Commands::List => commands::cmd_list(&settings),
        Commands::Nearest { lat, lng } => commands::cmd_nearest(&settings, lat, lng),
    }
}
