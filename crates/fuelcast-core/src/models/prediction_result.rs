//! Parsed answer from the prediction endpoint.

use serde_json::Value;

use crate::constants::ERROR_KEY;

/// Either a numeric prediction or a rejection with an optional message.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionResult {
    Prediction(f64),
    Rejected(Option<String>),
}

impl PredictionResult {
    /// Read a response body. A prediction requires a JSON number under
    /// `prediction_key`; anything else is a rejection carrying the body's
    /// `error` value, if it has a meaningful one.
    pub fn from_body(body: &Value, prediction_key: &str) -> Self {
        match body.get(prediction_key).and_then(Value::as_f64) {
            Some(value) => PredictionResult::Prediction(value),
            None => PredictionResult::Rejected(error_message(body)),
        }
    }

    pub fn prediction(&self) -> Option<f64> {
        match self {
            PredictionResult::Prediction(v) => Some(*v),
            PredictionResult::Rejected(_) => None,
        }
    }
}

/// Extract the `error` field. Empty strings, `false`, `0` and `null` count
/// as no message.
pub fn error_message(body: &Value) -> Option<String> {
    match body.get(ERROR_KEY)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
