//! Form field designation.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Which submitted fields escape numeric coercion.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FormConfig {
    /// Field kept as a string. Default: "ship_type".
    pub categorical_field: Option<String>,
    /// Checkbox field mapped to 1/0. Default: "monsoon_season".
    pub toggle_field: Option<String>,
}

impl FormConfig {
    pub fn effective_categorical_field(&self) -> &str {
        self.categorical_field
            .as_deref()
            .unwrap_or(defaults::DEFAULT_CATEGORICAL_FIELD)
    }

    pub fn effective_toggle_field(&self) -> &str {
        self.toggle_field
            .as_deref()
            .unwrap_or(defaults::DEFAULT_TOGGLE_FIELD)
    }
}
