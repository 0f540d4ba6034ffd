use crate::errors::PredictError;
use crate::models::FeatureVector;

/// Turns a shaped feature vector into a fuel estimate.
pub trait Predictor: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Estimate fuel for one voyage.
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictError>;
}
