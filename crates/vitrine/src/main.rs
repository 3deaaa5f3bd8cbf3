//! Vitrine service binary.

use clap::Parser;
use vitrine::cli::{Cli, Commands, handle_serve_command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads configuration.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { addr } => handle_serve_command(addr).await,
    }
}
