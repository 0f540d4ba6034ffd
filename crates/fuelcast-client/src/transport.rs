//! HTTP transport: one JSON POST per submission, no retries.

use std::time::Duration;

use fuelcast_core::config::FuelcastConfig;
use fuelcast_core::errors::SubmitError;
use fuelcast_core::models::prediction_result::error_message;
use fuelcast_core::models::{FormPayload, PredictionResult};
use serde_json::Value;

/// Configuration for the HTTP transport layer.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL of the prediction service.
    pub base_url: String,
    /// Path of the prediction endpoint.
    pub endpoint_path: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpClientConfig {
    pub fn from_config(config: &FuelcastConfig) -> Self {
        Self {
            base_url: config.client.effective_base_url().to_string(),
            endpoint_path: config.contract.effective_endpoint_path().to_string(),
            timeout: config.client.effective_timeout(),
        }
    }

    /// Full endpoint URL.
    pub fn url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint_path.trim_start_matches('/')
        )
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::from_config(&FuelcastConfig::default())
    }
}

/// Status and parsed JSON body of one endpoint answer.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReply {
    pub status: u16,
    pub body: Value,
}

impl PredictionReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Interpret the body under `prediction_key`.
    pub fn result(&self, prediction_key: &str) -> PredictionResult {
        PredictionResult::from_body(&self.body, prediction_key)
    }

    /// The prediction, or the rejection to report.
    ///
    /// A non-success status is always a rejection. A success status whose
    /// body has no numeric prediction is one too.
    pub fn into_prediction(self, prediction_key: &str) -> Result<f64, SubmitError> {
        if !self.is_success() {
            return Err(SubmitError::rejection(self.status, error_message(&self.body)));
        }
        match self.result(prediction_key) {
            PredictionResult::Prediction(value) => Ok(value),
            PredictionResult::Rejected(message) => {
                Err(SubmitError::rejection(self.status, message))
            }
        }
    }
}

/// Async client for the prediction endpoint.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    url: String,
}

impl PredictionClient {
    pub fn new(config: HttpClientConfig) -> Result<Self, SubmitError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .build()
            .map_err(|e| SubmitError::transport(e.to_string()))?;
        Ok(Self {
            http,
            url: config.url(),
        })
    }

    /// POST the payload as JSON and read the JSON answer.
    ///
    /// Every status with a JSON body yields a reply. Connection errors,
    /// timeouts and non-JSON bodies are transport failures.
    pub async fn post(&self, payload: &FormPayload) -> Result<PredictionReply, SubmitError> {
        tracing::debug!(url = %self.url, fields = payload.len(), "posting prediction request");

        let response = self
            .http
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::transport(e.to_string()))?;

        let status = response.status();
        let body = response.json::<Value>().await.map_err(|e| {
            SubmitError::transport(format!("unreadable response body (HTTP {status}): {e}"))
        })?;

        Ok(PredictionReply {
            status: status.as_u16(),
            body,
        })
    }
}
