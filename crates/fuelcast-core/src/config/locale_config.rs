//! Number display formatting.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Separators and precision for rendered values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LocaleConfig {
    /// Thousands separator. Default: ",".
    pub grouping_separator: Option<String>,
    /// Decimal separator. Default: ".".
    pub decimal_separator: Option<String>,
    /// Maximum fraction digits shown. Default: 3.
    pub max_fraction_digits: Option<u32>,
}

impl LocaleConfig {
    pub fn effective_grouping_separator(&self) -> &str {
        self.grouping_separator
            .as_deref()
            .unwrap_or(defaults::DEFAULT_GROUPING_SEPARATOR)
    }

    pub fn effective_decimal_separator(&self) -> &str {
        self.decimal_separator
            .as_deref()
            .unwrap_or(defaults::DEFAULT_DECIMAL_SEPARATOR)
    }

    pub fn effective_max_fraction_digits(&self) -> u32 {
        self.max_fraction_digits
            .unwrap_or(defaults::DEFAULT_MAX_FRACTION_DIGITS)
    }
}
