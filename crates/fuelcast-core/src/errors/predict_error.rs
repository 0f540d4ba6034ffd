//! Endpoint-side errors while shaping features or estimating.

use super::error_code::{self, FuelcastErrorCode};

/// Errors raised while turning a payload into a prediction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictError {
    #[error("payload must be a JSON object")]
    NotAnObject,

    #[error("missing feature: {name}")]
    MissingFeature { name: String },

    #[error("feature {name} is not a number")]
    NotANumber { name: String },

    #[error("estimator failed: {reason}")]
    Estimator { reason: String },
}

impl PredictError {
    /// Whether the caller sent a bad payload (as opposed to the estimator failing).
    pub fn is_client_error(&self) -> bool {
        !matches!(self, PredictError::Estimator { .. })
    }
}

impl FuelcastErrorCode for PredictError {
    fn error_code(&self) -> &'static str {
        match self {
            PredictError::Estimator { .. } => error_code::ESTIMATOR_ERROR,
            _ => error_code::INVALID_FEATURES,
        }
    }
}
