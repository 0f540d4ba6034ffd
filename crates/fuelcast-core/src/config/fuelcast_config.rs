//! Top-level fuelcast configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{
    defaults, AnimationConfig, ClientConfig, ContractConfig, FormConfig, LocaleConfig,
    ObservabilityConfig, ServerConfig,
};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`FUELCAST_*`)
/// 3. Config file (`--config` path, else `fuelcast.toml` in the root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FuelcastConfig {
    pub contract: ContractConfig,
    pub client: ClientConfig,
    pub form: FormConfig,
    pub animation: AnimationConfig,
    pub locale: LocaleConfig,
    pub server: ServerConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Explicit config file. Must exist when given.
    pub config_path: Option<PathBuf>,
    pub base_url: Option<String>,
    pub prediction_key: Option<String>,
    pub bind: Option<String>,
    pub log_level: Option<String>,
}

impl FuelcastConfig {
    /// Load configuration with layered resolution, reading `FUELCAST_*`
    /// variables from the process environment.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        Self::load_with_env(root, cli_overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration with an explicit environment lookup.
    pub fn load_with_env<F>(
        root: &Path,
        cli_overrides: Option<&CliOverrides>,
        env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // Layer 3: config file
        match cli_overrides.and_then(|c| c.config_path.as_deref()) {
            Some(explicit) => Self::merge_toml_file(&mut config, explicit)?,
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config, env);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &FuelcastConfig) -> Result<(), ConfigError> {
        if config.contract.effective_prediction_key().trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "contract.prediction_key".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if !config.contract.effective_endpoint_path().starts_with('/') {
            return Err(ConfigError::ValidationFailed {
                field: "contract.endpoint_path".to_string(),
                message: "must start with '/'".to_string(),
            });
        }
        if config.client.timeout_ms == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "client.timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.animation.frame_interval_ms == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "animation.frame_interval_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.locale.effective_max_fraction_digits() > defaults::MAX_FRACTION_DIGITS_LIMIT {
            return Err(ConfigError::ValidationFailed {
                field: "locale.max_fraction_digits".to_string(),
                message: format!("must be at most {}", defaults::MAX_FRACTION_DIGITS_LIMIT),
            });
        }
        let penalty = config.server.effective_penalty();
        if !(penalty.is_finite() && penalty > 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: "server.penalty".to_string(),
                message: "must be a positive number".to_string(),
            });
        }
        if config.form.effective_categorical_field() == config.form.effective_toggle_field() {
            return Err(ConfigError::ValidationFailed {
                field: "form.toggle_field".to_string(),
                message: "must differ from form.categorical_field".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut FuelcastConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: FuelcastConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a value.
    fn merge(base: &mut FuelcastConfig, other: &FuelcastConfig) {
        // Contract
        if other.contract.prediction_key.is_some() {
            base.contract.prediction_key = other.contract.prediction_key.clone();
        }
        if other.contract.endpoint_path.is_some() {
            base.contract.endpoint_path = other.contract.endpoint_path.clone();
        }

        // Client
        if other.client.base_url.is_some() {
            base.client.base_url = other.client.base_url.clone();
        }
        if other.client.timeout_ms.is_some() {
            base.client.timeout_ms = other.client.timeout_ms;
        }
        if other.client.busy_label.is_some() {
            base.client.busy_label = other.client.busy_label.clone();
        }

        // Form
        if other.form.categorical_field.is_some() {
            base.form.categorical_field = other.form.categorical_field.clone();
        }
        if other.form.toggle_field.is_some() {
            base.form.toggle_field = other.form.toggle_field.clone();
        }

        // Animation
        if other.animation.duration_ms.is_some() {
            base.animation.duration_ms = other.animation.duration_ms;
        }
        if other.animation.frame_interval_ms.is_some() {
            base.animation.frame_interval_ms = other.animation.frame_interval_ms;
        }
        if other.animation.reveal_delay_ms.is_some() {
            base.animation.reveal_delay_ms = other.animation.reveal_delay_ms;
        }

        // Locale
        if other.locale.grouping_separator.is_some() {
            base.locale.grouping_separator = other.locale.grouping_separator.clone();
        }
        if other.locale.decimal_separator.is_some() {
            base.locale.decimal_separator = other.locale.decimal_separator.clone();
        }
        if other.locale.max_fraction_digits.is_some() {
            base.locale.max_fraction_digits = other.locale.max_fraction_digits;
        }

        // Server
        if other.server.bind.is_some() {
            base.server.bind = other.server.bind.clone();
        }
        if !other.server.categories.is_empty() {
            base.server.categories = other.server.categories.clone();
        }
        if !other.server.numeric_features.is_empty() {
            base.server.numeric_features = other.server.numeric_features.clone();
        }
        if other.server.power_feature.is_some() {
            base.server.power_feature = other.server.power_feature.clone();
        }
        if other.server.sfoc_feature.is_some() {
            base.server.sfoc_feature = other.server.sfoc_feature.clone();
        }
        if other.server.distance_feature.is_some() {
            base.server.distance_feature = other.server.distance_feature.clone();
        }
        if other.server.speed_feature.is_some() {
            base.server.speed_feature = other.server.speed_feature.clone();
        }
        if other.server.penalty.is_some() {
            base.server.penalty = other.server.penalty;
        }

        // Observability
        if other.observability.log_level.is_some() {
            base.observability.log_level = other.observability.log_level.clone();
        }
        if other.observability.json.is_some() {
            base.observability.json = other.observability.json;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `FUELCAST_BASE_URL`, `FUELCAST_PREDICTION_KEY`, etc.
    /// Unparseable numeric values are ignored.
    fn apply_env_overrides<F>(config: &mut FuelcastConfig, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = env("FUELCAST_PREDICTION_KEY") {
            config.contract.prediction_key = Some(val);
        }
        if let Some(val) = env("FUELCAST_ENDPOINT_PATH") {
            config.contract.endpoint_path = Some(val);
        }
        if let Some(val) = env("FUELCAST_BASE_URL") {
            config.client.base_url = Some(val);
        }
        if let Some(val) = env("FUELCAST_TIMEOUT_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.client.timeout_ms = Some(v);
            }
        }
        if let Some(val) = env("FUELCAST_ANIMATION_DURATION_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.animation.duration_ms = Some(v);
            }
        }
        if let Some(val) = env("FUELCAST_BIND") {
            config.server.bind = Some(val);
        }
        if let Some(val) = env("FUELCAST_LOG_LEVEL") {
            config.observability.log_level = Some(val);
        }
        if let Some(val) = env("FUELCAST_LOG_JSON") {
            if let Ok(v) = val.parse::<bool>() {
                config.observability.json = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut FuelcastConfig, cli: &CliOverrides) {
        if let Some(ref url) = cli.base_url {
            config.client.base_url = Some(url.clone());
        }
        if let Some(ref key) = cli.prediction_key {
            config.contract.prediction_key = Some(key.clone());
        }
        if let Some(ref bind) = cli.bind {
            config.server.bind = Some(bind.clone());
        }
        if let Some(ref level) = cli.log_level {
            config.observability.log_level = Some(level.clone());
        }
    }
}
