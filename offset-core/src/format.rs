//! Number formatting shared by the result panels and the schematic.
//!
//! Output matches what a browser prints for the same values, so the page
//! reads the same no matter which side produced the text.

/// Shortest round-trip representation, as a browser stringifies a number.
pub fn js_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let a = v.abs();
    if (1e-6..1e21).contains(&a) {
        return format!("{}", v);
    }
    // Exponent form: 1e+21, 1.5e-7
    let s = format!("{:e}", v);
    match s.split_once('e') {
        Some((m, e)) if !e.starts_with('-') => format!("{}e+{}", m, e),
        _ => s,
    }
}

/// Fixed-point formatting with ties rounded away from zero.
pub fn to_fixed(v: f64, digits: usize) -> String {
    if !v.is_finite() {
        return js_number(v);
    }
    let neg = v < 0.0;
    // Enough extra digits that the rounding digit is exact for any
    // realistic measurement.
    let wide = format!("{:.*}", digits + 40, v.abs());
    let (int_part, frac_part) = wide.split_once('.').unwrap_or((wide.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .map(|b| b - b'0')
        .collect();
    let round_up = frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5');
    if round_up {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, 1);
                break;
            }
            i -= 1;
            if kept[i] == 9 {
                kept[i] = 0;
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if neg {
        out.push('-');
    }
    out.extend(kept[..split].iter().map(|d| (b'0' + d) as char));
    if digits > 0 {
        out.push('.');
        out.extend(kept[split..].iter().map(|d| (b'0' + d) as char));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_print_without_fraction() {
        assert_eq!(js_number(16.0), "16");
        assert_eq!(js_number(-8.0), "-8");
        assert_eq!(js_number(-0.0), "0");
        assert_eq!(js_number(6.35), "6.35");
    }

    #[test]
    fn shortest_round_trip_keeps_float_noise() {
        assert_eq!(js_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn exponent_form_outside_plain_range() {
        assert_eq!(js_number(1e21), "1e+21");
        assert_eq!(js_number(1.5e-7), "1.5e-7");
        assert_eq!(js_number(0.000001), "0.000001");
        assert_eq!(js_number(f64::INFINITY), "Infinity");
    }

    #[test]
    fn fixed_rounds_ties_away_from_zero() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.25, 1), "0.3");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
    }

    #[test]
    fn fixed_uses_exact_binary_value() {
        // 1.005 is stored slightly below the tie.
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(4.0, 2), "4.00");
        assert_eq!(to_fixed(9.999, 2), "10.00");
        assert_eq!(to_fixed(99.96, 1), "100.0");
    }

    #[test]
    fn fixed_keeps_sign_of_small_negatives() {
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
    }
}
