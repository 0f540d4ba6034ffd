//! HTTP client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for the submitting side.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the prediction service. Default: "http://127.0.0.1:5000".
    pub base_url: Option<String>,
    /// Request timeout in milliseconds. Default: 30000.
    pub timeout_ms: Option<u64>,
    /// Trigger label while a request is pending. Default: "Calculating...".
    pub busy_label: Option<String>,
}

impl ClientConfig {
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(defaults::DEFAULT_BASE_URL)
    }

    pub fn effective_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.unwrap_or(defaults::DEFAULT_TIMEOUT_MS))
    }

    pub fn effective_busy_label(&self) -> &str {
        self.busy_label
            .as_deref()
            .unwrap_or(defaults::DEFAULT_BUSY_LABEL)
    }
}
