//! Structured log events for submissions and served predictions.
//!
//! Each function emits a `tracing` event with structured fields.

use crate::errors::{FuelcastErrorCode, PredictError, SubmitError};

/// Create the span wrapping one form submission.
pub fn submission_span(submission_id: &str) -> ::tracing::Span {
    ::tracing::info_span!("fuelcast.submission", submission_id = %submission_id)
}

/// Log the start of a submission.
pub fn submission_started(field_count: usize, in_flight: usize) {
    ::tracing::info!(
        event = "submission_started",
        field_count = field_count,
        in_flight = in_flight,
        "submission started"
    );
}

/// Log a submission that began while another was still pending.
pub fn overlapping_submission(in_flight: usize) {
    ::tracing::warn!(
        event = "overlapping_submission",
        in_flight = in_flight,
        "submission started while another is pending"
    );
}

/// Log a prediction that reached the display.
pub fn prediction_displayed(value: f64) {
    ::tracing::info!(event = "prediction_displayed", value = value, "prediction displayed");
}

/// Log a failed submission.
pub fn submission_failed(err: &SubmitError) {
    match err {
        SubmitError::ServerRejection { status, message } => ::tracing::warn!(
            event = "submission_rejected",
            code = err.error_code(),
            status = status,
            message = %message,
            "server rejected submission"
        ),
        SubmitError::TransportFailure { reason } => ::tracing::error!(
            event = "transport_failed",
            code = err.error_code(),
            reason = %reason,
            "could not reach prediction endpoint"
        ),
    }
}

/// Log a prediction served by the endpoint.
pub fn prediction_served(predictor: &str, feature_count: usize, value: f64) {
    ::tracing::info!(
        event = "prediction_served",
        predictor = %predictor,
        feature_count = feature_count,
        value = value,
        "prediction served"
    );
}

/// Log a payload the endpoint refused.
pub fn prediction_refused(err: &PredictError) {
    ::tracing::warn!(
        event = "prediction_refused",
        code = err.error_code(),
        reason = %err,
        "prediction refused"
    );
}
