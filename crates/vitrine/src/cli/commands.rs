//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// AI-assisted marketing website generation and deployment.
#[derive(Debug, Parser)]
#[command(name = "vitrine", version, about)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP API server.
    Serve {
        /// Listen address override, e.g. "0.0.0.0:4000".
        /// Defaults to VITRINE_ADDR, then 127.0.0.1:4000.
        #[arg(long)]
        addr: Option<String>,
    },
}
