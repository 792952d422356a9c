//! ExecBrief CLI
//!
//! Demo driver for the ZeroEntropy knowledge-synthesis comparison.

use anyhow::Result;
use clap::Parser;
use execbrief_core::{ClaudeClient, ZeroEntropyClient};
use std::sync::Arc;

mod app;
mod commands;
mod progress;

use app::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; --verbose raises the default level to info
    let default_level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    // Missing API keys are not fatal: ZeroEntropy degrades to demo mode and
    // the Claude path reports its error per call.
    let zeroentropy = Arc::new(ZeroEntropyClient::from_env()?);
    let claude = Arc::new(ClaudeClient::from_env()?);

    match cli.command {
        Commands::Load => commands::load::run(&zeroentropy).await,
        Commands::Status => commands::status::run(&zeroentropy).await,
        Commands::Query(args) => commands::query::run(args, &zeroentropy).await,
        Commands::Compare(args) => commands::compare::run(args, zeroentropy, claude).await,
        Commands::Serve(args) => commands::serve::run(args, zeroentropy, claude).await,
    }
}
