use fuelcast_core::config::FormConfig;

/// Designates the fields that escape numeric coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    pub categorical_field: String,
    pub toggle_field: String,
}

impl FormSchema {
    pub fn new(categorical_field: impl Into<String>, toggle_field: impl Into<String>) -> Self {
        Self {
            categorical_field: categorical_field.into(),
            toggle_field: toggle_field.into(),
        }
    }

    pub fn from_config(config: &FormConfig) -> Self {
        Self::new(
            config.effective_categorical_field(),
            config.effective_toggle_field(),
        )
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::from_config(&FormConfig::default())
    }
}
