//! Lenient decimal parsing for the input fields.

/// Parse a field value the way the calculator reads it.
///
/// The first comma becomes a dot, then the longest numeric prefix after
/// leading whitespace is read. Anything unparsable yields `0.0`.
pub fn parse_measurement(raw: &str) -> f64 {
    let normalized = raw.replacen(',', ".", 1);
    match parse_float_prefix(&normalized) {
        Some(v) if !v.is_nan() => v,
        _ => 0.0,
    }
}

/// Read the longest leading float literal: `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
/// or `[+-]? Infinity`.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        let neg = bytes[0] == b'-';
        return Some(if neg {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        if mantissa_digits > 0 {
            i = j;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_and_dot_parse_identically() {
        assert_eq!(parse_measurement("12,5"), 12.5);
        assert_eq!(parse_measurement("12.5"), 12.5);
    }

    #[test]
    fn empty_and_garbage_become_zero() {
        assert_eq!(parse_measurement(""), 0.0);
        assert_eq!(parse_measurement("   "), 0.0);
        assert_eq!(parse_measurement("abc"), 0.0);
        assert_eq!(parse_measurement("."), 0.0);
        assert_eq!(parse_measurement("-"), 0.0);
        assert_eq!(parse_measurement("NaN"), 0.0);
    }

    #[test]
    fn reads_leading_numeric_prefix() {
        assert_eq!(parse_measurement("  8mm"), 8.0);
        assert_eq!(parse_measurement("6.35 (1/4\")"), 6.35);
        assert_eq!(parse_measurement("1e1"), 10.0);
        assert_eq!(parse_measurement("2e"), 2.0);
        assert_eq!(parse_measurement("3e+x"), 3.0);
        assert_eq!(parse_measurement(".5"), 0.5);
        assert_eq!(parse_measurement("5."), 5.0);
        assert_eq!(parse_measurement("-4,25"), -4.25);
        assert_eq!(parse_measurement("+7"), 7.0);
    }

    #[test]
    fn only_first_comma_is_a_separator() {
        assert_eq!(parse_measurement("1,5,3"), 1.5);
        assert_eq!(parse_measurement("1.5,3"), 1.5);
    }

    #[test]
    fn infinity_literal() {
        assert_eq!(parse_measurement("Infinity"), f64::INFINITY);
        assert_eq!(parse_measurement("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_measurement("inf"), 0.0);
    }
}
