//! Lenient number parsing for form inputs.

/// Parse the longest numeric prefix of `raw`, after leading whitespace.
///
/// Accepts an optional sign, `Infinity`, digits with an optional fraction
/// (`5.`, `.5`) and an optional exponent that is only consumed when it has
/// digits. Trailing garbage is ignored (`"12kg"` is 12). Returns NaN when
/// no digits lead the input.
pub fn parse_float(raw: &str) -> f64 {
    let s = raw.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    let negative = matches!(bytes.first(), Some(b'-'));
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    if s[i..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < len && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - (i + 1);
        i = j;
    }

    if digits == 0 {
        return f64::NAN;
    }

    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::parse_float;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_float("500"), 500.0);
        assert_eq!(parse_float("-1.25"), -1.25);
        assert_eq!(parse_float("+7"), 7.0);
    }

    #[test]
    fn partial_forms() {
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("-.5e1"), -5.0);
    }

    #[test]
    fn leading_whitespace_and_trailing_garbage() {
        assert_eq!(parse_float("  \t42"), 42.0);
        assert_eq!(parse_float("12kg"), 12.0);
        assert_eq!(parse_float("3.5.1"), 3.5);
    }

    #[test]
    fn exponent_needs_digits() {
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("1e+"), 1.0);
        assert_eq!(parse_float("2E-2"), 0.02);
    }

    #[test]
    fn infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinityx"), f64::NEG_INFINITY);
        assert!(parse_float("inf").is_nan());
    }

    #[test]
    fn no_digits_is_nan() {
        assert!(parse_float("").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float("on").is_nan());
    }
}
