//! Plinth command-line interface
//!
//! Inspect which backend the registry selects for a deployment and which
//! persisted models each entity group declares.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use plinth_composition::Registry;
use plinth_core::PlatformConfig;
use std::path::PathBuf;

mod commands;

use commands::{bindings, groups, resolve};

#[derive(Parser)]
#[command(name = "plinth")]
#[command(about = "Plinth - Platform Capability Registry", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path; defaults and PLINTH_* variables apply when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the implementation selected for one capability
    Resolve {
        /// Capability name, e.g. `storage` or `bulk_email`
        capability: String,
    },

    /// Show the backend selected for every capability
    Bindings {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List concrete models declared by entity groups
    Groups {
        /// Group names; every group when empty
        names: Vec<String>,

        /// Emit JSON instead of a list
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Resolve { capability } => {
            let registry = load_registry(cli.config.as_deref())?;
            resolve::run(&registry, &capability)?;
        }
        Commands::Bindings { json } => {
            let registry = load_registry(cli.config.as_deref())?;
            bindings::run(&registry, json)?;
        }
        Commands::Groups { names, json } => {
            groups::run(&names, json)?;
        }
    }

    Ok(())
}

fn load_registry(path: Option<&std::path::Path>) -> Result<Registry> {
    let config = PlatformConfig::load(path).context("Failed to load platform configuration")?;
    tracing::debug!(flags = ?config.flags(), "Loaded configuration");
    Ok(Registry::from_config(config))
}
