//! # fuelcast-core
//!
//! Foundation crate for fuelcast.
//! Defines the payload and result types, the view and predictor traits,
//! errors, layered config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::FuelcastConfig;
pub use errors::{FuelcastError, FuelcastResult, SubmitError};
pub use models::{FieldValue, FormPayload, FormSnapshot, PredictionResult};
pub use traits::{Predictor, SubmitView};
