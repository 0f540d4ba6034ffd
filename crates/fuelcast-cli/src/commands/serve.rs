//! `fuelcast serve`: run the prediction endpoint until Ctrl-C.

use anyhow::Context;
use fuelcast_core::config::FuelcastConfig;
use fuelcast_server::AppState;
use tokio::net::TcpListener;

pub async fn run(config: &FuelcastConfig) -> anyhow::Result<()> {
    let bind = config.server.effective_bind();
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("binding {bind}"))?;

    fuelcast_server::serve(listener, AppState::from_config(config), async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for shutdown signal");
        }
        tracing::info!("shutting down");
    })
    .await
    .context("serving predictions")
}
