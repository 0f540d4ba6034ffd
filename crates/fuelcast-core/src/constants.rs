/// fuelcast version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Response key used by the tons-denominated endpoint.
pub const PREDICTION_KEY_TONS: &str = "predicted_fuel_tons";

/// Response key used by the liters-denominated endpoint.
pub const PREDICTION_KEY_LITERS: &str = "predicted_fuel_liters";

/// Key carrying the server's error message in a rejection body.
pub const ERROR_KEY: &str = "error";

/// Fallback shown when a rejection carries no message.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Alert prefix for server rejections.
pub const REJECTION_ALERT_PREFIX: &str = "Error: ";

/// Alert shown when the endpoint cannot be reached.
pub const CONNECTIVITY_ALERT: &str = "Failed to connect to the server.";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "fuelcast.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "FUELCAST_LOG";
