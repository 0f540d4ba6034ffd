//! Locale-style number rendering for the result display.

use fuelcast_core::config::LocaleConfig;

/// Largest scaled magnitude rounded exactly through `f64::round`.
const EXACT_SCALED_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53

/// Fraction digits beyond this go through the exact decimal expansion.
const MAX_INTEGER_PATH_DIGITS: usize = 15;

/// Grouped decimal formatting, en-US style by default: `1,234,567.891`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    grouping_separator: String,
    decimal_separator: String,
    max_fraction_digits: u32,
}

impl NumberFormat {
    pub fn new(
        grouping_separator: impl Into<String>,
        decimal_separator: impl Into<String>,
        max_fraction_digits: u32,
    ) -> Self {
        Self {
            grouping_separator: grouping_separator.into(),
            decimal_separator: decimal_separator.into(),
            max_fraction_digits,
        }
    }

    pub fn from_config(config: &LocaleConfig) -> Self {
        Self::new(
            config.effective_grouping_separator(),
            config.effective_decimal_separator(),
            config.effective_max_fraction_digits(),
        )
    }

    /// Render `value` with grouped integer digits and at most
    /// `max_fraction_digits` fraction digits, rounded half away from zero,
    /// trailing zeros trimmed.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        let digits = self.max_fraction_digits as usize;
        let (integer, fraction) = split_rounded(value.abs(), digits);
        let fraction = fraction.trim_end_matches('0');

        let is_zero = integer.bytes().all(|b| b == b'0') && fraction.is_empty();
        let mut out = String::new();
        if value < 0.0 && !is_zero {
            out.push('-');
        }
        out.push_str(&self.group(&integer));
        if !fraction.is_empty() {
            out.push_str(&self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }

    fn group(&self, integer: &str) -> String {
        let len = integer.len();
        let mut out = String::with_capacity(len + len / 3 * self.grouping_separator.len());
        for (i, ch) in integer.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push_str(&self.grouping_separator);
            }
            out.push(ch);
        }
        out
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::from_config(&LocaleConfig::default())
    }
}

/// Split a non-negative finite value into integer digits and exactly
/// `digits` fraction digits.
fn split_rounded(abs: f64, digits: usize) -> (String, String) {
    let factor = 10f64.powi(digits as i32);
    let scaled = (abs * factor).round();

    if digits <= MAX_INTEGER_PATH_DIGITS && scaled < EXACT_SCALED_LIMIT {
        let scaled = scaled as u64;
        let pow = 10u64.pow(digits as u32);
        let integer = (scaled / pow).to_string();
        let fraction = if digits == 0 {
            String::new()
        } else {
            format!("{:0width$}", scaled % pow, width = digits)
        };
        return (integer, fraction);
    }

    // Scaled value no longer fits the integer path.
    let text = format!("{abs:.digits$}");
    match text.split_once('.') {
        Some((integer, fraction)) => (integer.to_string(), fraction.to_string()),
        None => (text, String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en() -> NumberFormat {
        NumberFormat::default()
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(en().format(0.0), "0");
        assert_eq!(en().format(500.0), "500");
        assert_eq!(en().format(1234.0), "1,234");
        assert_eq!(en().format(1_234_567.0), "1,234,567");
        assert_eq!(en().format(-98_765.0), "-98,765");
    }

    #[test]
    fn rounds_to_three_fraction_digits() {
        assert_eq!(en().format(1234.5678), "1,234.568");
        assert_eq!(en().format(12.5), "12.5");
        assert_eq!(en().format(0.0004), "0");
        assert_eq!(en().format(0.9999), "1");
    }

    #[test]
    fn ties_round_away_from_zero() {
        // 1.0625 is exactly representable.
        assert_eq!(en().format(1.0625), "1.063");
        assert_eq!(en().format(-1.0625), "-1.063");
    }

    #[test]
    fn negative_values_rounding_to_zero_drop_the_sign() {
        assert_eq!(en().format(-0.0), "0");
        assert_eq!(en().format(-0.0001), "0");
    }

    #[test]
    fn non_finite() {
        assert_eq!(en().format(f64::NAN), "NaN");
        assert_eq!(en().format(f64::INFINITY), "∞");
        assert_eq!(en().format(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn huge_values_use_exact_expansion() {
        assert_eq!(en().format(1e20), "100,000,000,000,000,000,000");
    }

    #[test]
    fn custom_separators() {
        let de = NumberFormat::new(".", ",", 2);
        assert_eq!(de.format(1234567.891), "1.234.567,89");
        let plain = NumberFormat::new("", ".", 0);
        assert_eq!(plain.format(1234.5), "1235");
    }
}
