//! Submission errors: the two ways a form submission can fail.

use super::error_code::{self, FuelcastErrorCode};
use crate::constants::{CONNECTIVITY_ALERT, REJECTION_ALERT_PREFIX, UNKNOWN_ERROR_MESSAGE};

/// Failure of a single form submission.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    /// The endpoint answered, but not with a usable prediction.
    #[error("server rejected submission (HTTP {status}): {message}")]
    ServerRejection { status: u16, message: String },

    /// The request never produced a readable answer.
    #[error("transport failure: {reason}")]
    TransportFailure { reason: String },
}

impl SubmitError {
    /// Build a rejection, falling back to the generic message when the
    /// server gave none.
    pub fn rejection(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
        SubmitError::ServerRejection { status, message }
    }

    pub fn transport(reason: impl Into<String>) -> Self {
        SubmitError::TransportFailure {
            reason: reason.into(),
        }
    }

    /// Text of the blocking alert shown to the user.
    pub fn alert_text(&self) -> String {
        match self {
            SubmitError::ServerRejection { message, .. } => {
                format!("{REJECTION_ALERT_PREFIX}{message}")
            }
            SubmitError::TransportFailure { .. } => CONNECTIVITY_ALERT.to_string(),
        }
    }
}

impl FuelcastErrorCode for SubmitError {
    fn error_code(&self) -> &'static str {
        match self {
            SubmitError::ServerRejection { .. } => error_code::SERVER_REJECTION,
            SubmitError::TransportFailure { .. } => error_code::TRANSPORT_FAILURE,
        }
    }
}
