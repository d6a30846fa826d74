/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;
/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Converts an `f64` to `i64` if and only if it is integral and within the
/// safe integer range, so that the conversion round-trips exactly.
///
/// `-0.0` converts to `0`.
///
/// ## Example
/// ```
/// use isolit::util::num::{MAX_SAFE_I64_INT, f64_to_safe_i64};
///
/// assert_eq!(f64_to_safe_i64(1000.0), Some(1000));
/// assert_eq!(f64_to_safe_i64(1.5), None);
/// assert_eq!(f64_to_safe_i64(f64::NAN), None);
/// assert_eq!(f64_to_safe_i64(1e20), None);
/// assert_eq!(f64_to_safe_i64(MAX_SAFE_I64_INT as f64), Some(MAX_SAFE_I64_INT));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_safe_i64(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value.abs() > MAX_SAFE_U64_INT as f64 {
        return None;
    }
    Some(value as i64)
}

/// Accumulates the digits of a hexadecimal, octal or binary literal.
///
/// The caller passes the digits without the `0x`/`0o`/`0b` prefix. Values
/// beyond `u64` keep accumulating in floating point, so `0x` literals of any
/// length produce the nearest double rather than overflowing.
///
/// Returns `None` when a digit is not valid for the radix.
///
/// ## Example
/// ```
/// use isolit::util::num::parse_radix_digits;
///
/// assert_eq!(parse_radix_digits("ff", 16), Some(255.0));
/// assert_eq!(parse_radix_digits("777", 8), Some(511.0));
/// assert_eq!(parse_radix_digits("102", 2), None);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn parse_radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    if let Ok(n) = u64::from_str_radix(digits, radix) {
        return Some(n as f64);
    }
    let mut acc = 0.0_f64;
    for c in digits.chars() {
        let d = c.to_digit(radix)?;
        acc = acc.mul_add(f64::from(radix), f64::from(d));
    }
    Some(acc)
}

/// Formats a number the way ECMAScript's `Number.prototype.toString` does.
///
/// Integral values print without a fraction, magnitudes at or above `1e21`
/// or below `1e-6` switch to exponent notation with an explicit sign, and
/// non-finite values print as `NaN`, `Infinity` or `-Infinity`.
///
/// ## Example
/// ```
/// use isolit::util::num::format_number;
///
/// assert_eq!(format_number(42.0), "42");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1.5), "1.5");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1.5e-7), "1.5e-7");
/// assert_eq!(format_number(0.000_001), "0.000001");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        },
        _ => formatted,
    }
}
