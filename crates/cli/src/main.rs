//! Multisig CLI - Main entry point

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "multisig")]
#[command(about = "Multisig wallet - config validation and event log audit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a wallet config and print the owner set
    CheckConfig {
        /// Path to the JSON config
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Print every event in a log directory
    Inspect {
        /// Event log directory
        #[arg(short, long, env = "MULTISIG_LOG_DIR", default_value = "./data/events")]
        log: PathBuf,

        /// Only show events for this action index
        #[arg(long)]
        action: Option<u64>,
    },

    /// Verify the hash chain of a log directory
    Audit {
        /// Event log directory
        #[arg(short, long, env = "MULTISIG_LOG_DIR", default_value = "./data/events")]
        log: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::CheckConfig { config } => commands::check_config(&config, &mut out)?,
        Commands::Inspect { log, action } => commands::inspect(&log, action, &mut out)?,
        Commands::Audit { log } => {
            if !commands::audit(&log, &mut out)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
