//! Configuration system for fuelcast.
//! TOML-based, 4-layer resolution: CLI > env > project > defaults.

pub mod animation_config;
pub mod client_config;
pub mod contract_config;
pub mod defaults;
pub mod form_config;
pub mod fuelcast_config;
pub mod locale_config;
pub mod observability_config;
pub mod server_config;

pub use animation_config::AnimationConfig;
pub use client_config::ClientConfig;
pub use contract_config::ContractConfig;
pub use form_config::FormConfig;
pub use fuelcast_config::{CliOverrides, FuelcastConfig};
pub use locale_config::LocaleConfig;
pub use observability_config::ObservabilityConfig;
pub use server_config::ServerConfig;
