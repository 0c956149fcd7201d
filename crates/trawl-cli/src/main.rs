//! Trawl CLI entry point.

#![forbid(unsafe_code)]

use clap::Parser;
use trawl_cli::{Cli, commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info,trawl=debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    tracing::debug!(command = ?cli.command, "starting");
    commands::run(cli).await?;
    Ok(())
}
