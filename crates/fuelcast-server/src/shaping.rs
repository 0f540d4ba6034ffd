//! Turns a submitted payload into the estimator's input.
//!
//! Numeric features come first, in configured order, followed by one
//! `{categorical}_{category}` indicator column per known category. An
//! unknown category leaves every indicator at 0. Fields not named by the
//! configuration are ignored.

use fuelcast_core::config::FuelcastConfig;
use fuelcast_core::errors::PredictError;
use fuelcast_core::models::FeatureVector;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureShaper {
    categorical_field: String,
    categories: Vec<String>,
    numeric_features: Vec<String>,
}

impl FeatureShaper {
    pub fn new(
        categorical_field: impl Into<String>,
        categories: Vec<String>,
        numeric_features: Vec<String>,
    ) -> Self {
        Self {
            categorical_field: categorical_field.into(),
            categories,
            numeric_features,
        }
    }

    pub fn from_config(config: &FuelcastConfig) -> Self {
        Self::new(
            config.form.effective_categorical_field(),
            config.server.effective_categories(),
            config.server.effective_numeric_features(),
        )
    }

    /// Column names in model order.
    pub fn feature_order(&self) -> Vec<String> {
        self.numeric_features
            .iter()
            .cloned()
            .chain(self.categories.iter().map(|c| self.indicator_name(c)))
            .collect()
    }

    pub fn shape(&self, payload: &Value) -> Result<FeatureVector, PredictError> {
        let fields = payload.as_object().ok_or(PredictError::NotAnObject)?;

        let mut features = FeatureVector::new();
        for name in &self.numeric_features {
            features.push(name.as_str(), numeric(fields, name)?);
        }

        let category = fields.get(&self.categorical_field).ok_or_else(|| {
            PredictError::MissingFeature {
                name: self.categorical_field.clone(),
            }
        })?;
        for known in &self.categories {
            let hit = category.as_str() == Some(known.as_str());
            features.push(self.indicator_name(known), if hit { 1.0 } else { 0.0 });
        }

        Ok(features)
    }

    fn indicator_name(&self, category: &str) -> String {
        format!("{}_{}", self.categorical_field, category)
    }
}

fn numeric(fields: &Map<String, Value>, name: &str) -> Result<f64, PredictError> {
    match fields.get(name) {
        None => Err(PredictError::MissingFeature {
            name: name.to_string(),
        }),
        Some(value) => value.as_f64().ok_or_else(|| PredictError::NotANumber {
            name: name.to_string(),
        }),
    }
}
