//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the fuelcast tracing/logging system.
///
/// Reads the `FUELCAST_LOG` environment variable for per-target levels.
/// Format: `FUELCAST_LOG=fuelcast_client=debug,fuelcast_server=info`
///
/// Falls back to the configured level if `FUELCAST_LOG` is not set or is
/// invalid. Idempotent; later calls are no-ops.
pub fn init_tracing(config: &ObservabilityConfig) {
    let fallback = config.effective_log_level().to_string();
    let json = config.effective_json();

    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&fallback));

        if json {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
