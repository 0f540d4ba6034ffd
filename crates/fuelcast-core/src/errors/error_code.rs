//! Stable error codes attached to log events.

/// Every error enum exposes a short stable code for structured logs.
pub trait FuelcastErrorCode {
    /// Returns the error code string (e.g., "SERVER_REJECTION").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SERVER_REJECTION: &str = "SERVER_REJECTION";
pub const TRANSPORT_FAILURE: &str = "TRANSPORT_FAILURE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_FEATURES: &str = "INVALID_FEATURES";
pub const ESTIMATOR_ERROR: &str = "ESTIMATOR_ERROR";
