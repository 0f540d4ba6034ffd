//! `fuelcast` binary.

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use fuelcast_core::config::FuelcastConfig;
use fuelcast_core::tracing::init_tracing;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let root = std::env::current_dir().context("resolving working directory")?;
    let config =
        FuelcastConfig::load(&root, Some(&cli.overrides())).context("loading configuration")?;
    init_tracing(&config.observability);

    tracing::debug!(
        version = fuelcast_core::constants::VERSION,
        prediction_key = config.contract.effective_prediction_key(),
        "configuration loaded"
    );

    match &cli.command {
        Command::Predict(args) => commands::predict::run(args, &config).await,
        Command::Serve(_) => {
            commands::serve::run(&config).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
