//! Linkrank CLI
//!
//! Rank a directory of HTML pages by link importance.

use anyhow::Result;
use clap::Parser;
use linkrank_core::error::exit_codes;
use linkrank_core::LinkRankError;

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<LinkRankError>()
            .map(LinkRankError::exit_code)
            .unwrap_or(exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Rank(args) => commands::rank::run(args, cli.config, cli.format).await,
        Commands::Sample(args) => commands::sample::run(args, cli.config, cli.format).await,
        Commands::Iterate(args) => commands::iterate::run(args, cli.config, cli.format).await,
        Commands::Links(args) => commands::links::run(args, cli.format).await,
    }
}
