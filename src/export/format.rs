//! Real number formatting in the layout of C's `%g`.
//!
//! Two digit sources share one layout: a fixed number of significant digits
//! ([`format_general`], exactly `%.<precision>g`), or the shortest digit
//! string that parses back to the same value ([`format_shortest_f64`],
//! [`format_shortest_f32`]).

/// Significant digits that make `%g` switch layouts for shortest f64 output.
const F64_ROUND_TRIP_DIGITS: i64 = 17;
/// Same for f32.
const F32_ROUND_TRIP_DIGITS: i64 = 9;

/// Format `value` with `precision` significant digits, the way `printf`'s
/// `%g` does: fixed notation when the decimal exponent is in
/// `-4..precision`, scientific notation otherwise, trailing zeros removed.
pub fn format_general(value: f64, precision: usize) -> String {
    if let Some(text) = non_finite(value) {
        return text;
    }
    let precision = precision.max(1);
    layout(&format!("{:.*e}", precision - 1, value), precision as i64)
}

/// Shortest text that parses back to exactly `value`, laid out like `%.17g`.
pub fn format_shortest_f64(value: f64) -> String {
    if let Some(text) = non_finite(value) {
        return text;
    }
    layout(&format!("{:e}", value), F64_ROUND_TRIP_DIGITS)
}

/// Shortest text that parses back (as `f32`) to exactly `value`, laid out
/// like `%.9g`.
pub fn format_shortest_f32(value: f32) -> String {
    if let Some(text) = non_finite(f64::from(value)) {
        return text;
    }
    layout(&format!("{:e}", value), F32_ROUND_TRIP_DIGITS)
}

fn non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some(if value.is_sign_negative() { "-nan" } else { "nan" }.to_string())
    } else if value.is_infinite() {
        Some(if value < 0.0 { "-inf" } else { "inf" }.to_string())
    } else {
        None
    }
}

/// Lay out Rust scientific text (`-1.2345e-3`) the way `%g` would with
/// `threshold` significant digits.
fn layout(scientific: &str, threshold: i64) -> String {
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific.to_string();
    };
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let digits = match digits.trim_end_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };

    if exponent < -4 || exponent >= threshold {
        let (head, tail) = digits.split_at(1);
        let dot = if tail.is_empty() { "" } else { "." };
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        format!("{sign}{head}{dot}{tail}e{exp_sign}{:02}", exponent.abs())
    } else if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        format!("{sign}0.{zeros}{digits}")
    } else {
        let int_len = exponent as usize + 1;
        if digits.len() <= int_len {
            let zeros = "0".repeat(int_len - digits.len());
            format!("{sign}{digits}{zeros}")
        } else {
            let (int_part, frac_part) = digits.split_at(int_len);
            format!("{sign}{int_part}.{frac_part}")
        }
    }
}
