//! Closed-form fuel baseline.
//!
//! `fuel_tons = power_kw * sfoc * (distance / speed) / 1e6 * penalty`,
//! where `distance / speed` is the voyage time in hours. Every input must be
//! positive, so the estimate is never negative.

use fuelcast_core::config::FuelcastConfig;
use fuelcast_core::errors::PredictError;
use fuelcast_core::models::FeatureVector;
use fuelcast_core::traits::Predictor;

const GRAMS_PER_TON: f64 = 1_000_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsEstimator {
    power_feature: String,
    sfoc_feature: String,
    distance_feature: String,
    speed_feature: String,
    penalty: f64,
}

impl PhysicsEstimator {
    pub fn from_config(config: &FuelcastConfig) -> Self {
        let server = &config.server;
        Self {
            power_feature: server.effective_power_feature().to_string(),
            sfoc_feature: server.effective_sfoc_feature().to_string(),
            distance_feature: server.effective_distance_feature().to_string(),
            speed_feature: server.effective_speed_feature().to_string(),
            penalty: server.effective_penalty(),
        }
    }

    pub fn with_penalty(mut self, penalty: f64) -> Self {
        self.penalty = penalty;
        self
    }

    fn input(&self, features: &FeatureVector, name: &str) -> Result<f64, PredictError> {
        features.get(name).ok_or_else(|| PredictError::Estimator {
            reason: format!("feature {name} not in model input"),
        })
    }
}

impl Default for PhysicsEstimator {
    fn default() -> Self {
        Self::from_config(&FuelcastConfig::default())
    }
}

impl Predictor for PhysicsEstimator {
    fn name(&self) -> &str {
        "physics-baseline"
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictError> {
        let power = self.input(features, &self.power_feature)?;
        let sfoc = self.input(features, &self.sfoc_feature)?;
        let distance = self.input(features, &self.distance_feature)?;
        let speed = self.input(features, &self.speed_feature)?;

        for (name, value) in [
            (&self.power_feature, power),
            (&self.sfoc_feature, sfoc),
            (&self.distance_feature, distance),
            (&self.speed_feature, speed),
        ] {
            if value <= 0.0 {
                return Err(PredictError::Estimator {
                    reason: format!("{name} must be positive"),
                });
            }
        }

        let hours = distance / speed;
        let fuel = power * sfoc * hours / GRAMS_PER_TON * self.penalty;
        if !fuel.is_finite() {
            return Err(PredictError::Estimator {
                reason: "estimate is not finite".to_string(),
            });
        }
        Ok(fuel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voyage(speed: f64) -> FeatureVector {
        let mut features = FeatureVector::new();
        features.push("engine_power_kw", 10_000.0);
        features.push("sfoc", 200.0);
        features.push("distance_nm", 240.0);
        features.push("avg_speed_knots", speed);
        features
    }

    #[test]
    fn baseline_formula() {
        let estimator = PhysicsEstimator::default().with_penalty(1.0);
        // 10_000 kW * 200 g/kWh * 20 h = 40 t
        assert!((estimator.predict(&voyage(12.0)).unwrap() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn default_penalty_applies() {
        let fuel = PhysicsEstimator::default().predict(&voyage(12.0)).unwrap();
        assert!((fuel - 46.0).abs() < 1e-9);
    }

    #[test]
    fn zero_speed_is_an_estimator_error() {
        let err = PhysicsEstimator::default().predict(&voyage(0.0)).unwrap_err();
        assert!(!err.is_client_error());
    }

    #[test]
    fn non_positive_inputs_are_refused() {
        for name in ["engine_power_kw", "sfoc", "distance_nm"] {
            let mut features = FeatureVector::new();
            for (column, value) in [
                ("engine_power_kw", 10_000.0),
                ("sfoc", 200.0),
                ("distance_nm", 240.0),
                ("avg_speed_knots", 12.0),
            ] {
                features.push(column, if column == name { -0.05 } else { value });
            }
            let err = PhysicsEstimator::default().predict(&features).unwrap_err();
            assert_eq!(
                err,
                PredictError::Estimator {
                    reason: format!("{name} must be positive"),
                }
            );
        }
    }
}
