//! Request state shared by every handler.

use std::sync::Arc;

use fuelcast_core::config::FuelcastConfig;
use fuelcast_core::traits::Predictor;

use crate::estimator::PhysicsEstimator;
use crate::shaping::FeatureShaper;

/// Immutable after construction; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub shaper: Arc<FeatureShaper>,
    pub predictor: Arc<dyn Predictor>,
    /// Response key the prediction is returned under.
    pub prediction_key: Arc<str>,
    pub endpoint_path: Arc<str>,
}

impl AppState {
    pub fn new(
        shaper: FeatureShaper,
        predictor: Arc<dyn Predictor>,
        prediction_key: &str,
        endpoint_path: &str,
    ) -> Self {
        Self {
            shaper: Arc::new(shaper),
            predictor,
            prediction_key: Arc::from(prediction_key),
            endpoint_path: Arc::from(endpoint_path),
        }
    }

    /// State serving the physics baseline with every setting from `config`.
    pub fn from_config(config: &FuelcastConfig) -> Self {
        Self::new(
            FeatureShaper::from_config(config),
            Arc::new(PhysicsEstimator::from_config(config)),
            config.contract.effective_prediction_key(),
            config.contract.effective_endpoint_path(),
        )
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("shaper", &self.shaper)
            .field("predictor", &self.predictor.name())
            .field("prediction_key", &self.prediction_key)
            .field("endpoint_path", &self.endpoint_path)
            .finish()
    }
}
