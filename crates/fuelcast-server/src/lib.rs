//! # fuelcast-server
//!
//! The backend the prediction form posts to.
//!
//! | Module | Purpose |
//! |---|---|
//! | [`shaping`] | payload → ordered [`FeatureVector`](fuelcast_core::models::FeatureVector) with one-hot categories |
//! | [`estimator`] | closed-form physics baseline implementing [`Predictor`](fuelcast_core::Predictor) |
//! | [`state`] | shared, immutable request state |
//! | [`routes`] | axum router and server loop |

pub mod estimator;
pub mod routes;
pub mod shaping;
pub mod state;

pub use estimator::PhysicsEstimator;
pub use routes::{build_router, serve};
pub use shaping::FeatureShaper;
pub use state::AppState;
