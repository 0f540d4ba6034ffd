//! Wire contract shared by the client and the endpoint.

use serde::{Deserialize, Serialize};

use super::defaults;

/// The pieces of the HTTP contract both sides must agree on.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContractConfig {
    /// Response key holding the numeric prediction.
    /// Default: "predicted_fuel_tons".
    pub prediction_key: Option<String>,
    /// Path of the prediction endpoint. Default: "/predict_fuel".
    pub endpoint_path: Option<String>,
}

impl ContractConfig {
    pub fn effective_prediction_key(&self) -> &str {
        self.prediction_key
            .as_deref()
            .unwrap_or(defaults::DEFAULT_PREDICTION_KEY)
    }

    pub fn effective_endpoint_path(&self) -> &str {
        self.endpoint_path
            .as_deref()
            .unwrap_or(defaults::DEFAULT_ENDPOINT_PATH)
    }
}
