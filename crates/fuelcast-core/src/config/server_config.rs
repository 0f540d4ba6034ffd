//! Prediction endpoint configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for the prediction endpoint and its baseline estimator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address. Default: "127.0.0.1:5000".
    pub bind: Option<String>,
    /// Categories one-hot encoded from the categorical field.
    /// Default: Cargo, Container, Tanker.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Numeric features, in model order.
    #[serde(default)]
    pub numeric_features: Vec<String>,
    /// Engine power feature read by the estimator.
    pub power_feature: Option<String>,
    /// Specific fuel oil consumption feature read by the estimator.
    pub sfoc_feature: Option<String>,
    /// Distance feature read by the estimator.
    pub distance_feature: Option<String>,
    /// Speed feature read by the estimator.
    pub speed_feature: Option<String>,
    /// Sea-state penalty multiplier. Default: 1.15.
    pub penalty: Option<f64>,
}

impl ServerConfig {
    pub fn effective_bind(&self) -> &str {
        self.bind.as_deref().unwrap_or(defaults::DEFAULT_BIND)
    }

    pub fn effective_categories(&self) -> Vec<String> {
        if self.categories.is_empty() {
            defaults::DEFAULT_CATEGORIES
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            self.categories.clone()
        }
    }

    pub fn effective_numeric_features(&self) -> Vec<String> {
        if self.numeric_features.is_empty() {
            defaults::DEFAULT_NUMERIC_FEATURES
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            self.numeric_features.clone()
        }
    }

    pub fn effective_power_feature(&self) -> &str {
        self.power_feature
            .as_deref()
            .unwrap_or(defaults::DEFAULT_POWER_FEATURE)
    }

    pub fn effective_sfoc_feature(&self) -> &str {
        self.sfoc_feature
            .as_deref()
            .unwrap_or(defaults::DEFAULT_SFOC_FEATURE)
    }

    pub fn effective_distance_feature(&self) -> &str {
        self.distance_feature
            .as_deref()
            .unwrap_or(defaults::DEFAULT_DISTANCE_FEATURE)
    }

    pub fn effective_speed_feature(&self) -> &str {
        self.speed_feature
            .as_deref()
            .unwrap_or(defaults::DEFAULT_SPEED_FEATURE)
    }

    pub fn effective_penalty(&self) -> f64 {
        self.penalty.unwrap_or(defaults::DEFAULT_PENALTY)
    }
}
