//! Error handling for fuelcast.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod fuelcast_error;
pub mod predict_error;
pub mod submit_error;

pub use config_error::ConfigError;
pub use error_code::FuelcastErrorCode;
pub use fuelcast_error::{FuelcastError, FuelcastResult};
pub use predict_error::PredictError;
pub use submit_error::SubmitError;
