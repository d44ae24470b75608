//! # Vector Text
//!
//! Tolerant parsing and formatting of the rotation, scale and translation
//! text fields.

use config::constants::{FLOAT_SIGNIFICANT_DIGITS, VECTOR_FORMAT_SEPARATOR};
use glam::DVec3;

/// Parses a three component vector from delimited text.
///
/// Components that are not real numbers take `default_value`. Extra
/// components are dropped; missing ones repeat the last component.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_generator::vector::parse_vector3;
///
/// assert_eq!(parse_vector3("1, 2", ',', 0.0), DVec3::new(1.0, 2.0, 2.0));
/// assert_eq!(parse_vector3("1*x*3*4", '*', 1.0), DVec3::new(1.0, 1.0, 3.0));
/// ```
pub fn parse_vector3(text: &str, delimiter: char, default_value: f64) -> DVec3 {
    let mut components = text
        .split(delimiter)
        .map(|component| component.trim().parse::<f64>().unwrap_or(default_value))
        .take(3);
    // split always yields at least one item
    let x = components.next().unwrap_or(default_value);
    let y = components.next().unwrap_or(x);
    let z = components.next().unwrap_or(y);
    DVec3::new(x, y, z)
}

/// Formats a vector with eight significant digits per component.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_generator::vector::format_vector3;
///
/// assert_eq!(format_vector3(DVec3::new(0.0, 1.5, 1.0e-6)), "0, 1.5, 1e-06");
/// ```
pub fn format_vector3(vector: DVec3) -> String {
    vector
        .to_array()
        .iter()
        .map(|value| format_real(*value, FLOAT_SIGNIFICANT_DIGITS))
        .collect::<Vec<_>>()
        .join(VECTOR_FORMAT_SEPARATOR)
}

/// Formats a real in general notation with `significant` digits.
///
/// Fixed notation is used when the decimal exponent lies in
/// `-4..significant`, scientific notation otherwise. Trailing zeros are
/// removed in both cases.
pub fn format_real(value: f64, significant: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let precision = significant.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_vector() {
        assert_eq!(parse_vector3("1,2,3", ',', 0.0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_parse_pads_with_last_component() {
        assert_eq!(parse_vector3("2", ',', 0.0), DVec3::splat(2.0));
        assert_eq!(parse_vector3("", ',', 1.0), DVec3::splat(1.0));
    }

    #[test]
    fn test_parse_truncates_extra_components() {
        assert_eq!(parse_vector3("1,2,3,4,5", ',', 0.0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_parse_invalid_components_take_default() {
        assert_eq!(parse_vector3("a, 2, ", ',', 1.0), DVec3::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn test_parse_legacy_scale_delimiter() {
        assert_eq!(parse_vector3("1*1*2.5", '*', 1.0), DVec3::new(1.0, 1.0, 2.5));
    }

    #[test]
    fn test_format_real_fixed() {
        assert_eq!(format_real(1.0, 8), "1");
        assert_eq!(format_real(-2.5, 8), "-2.5");
        assert_eq!(format_real(1.23456789, 8), "1.2345679");
        assert_eq!(format_real(0.0001, 8), "0.0001");
        assert_eq!(format_real(12345678.0, 8), "12345678");
    }

    #[test]
    fn test_format_real_scientific() {
        assert_eq!(format_real(123456789.0, 8), "1.2345679e+08");
        assert_eq!(format_real(0.00001, 8), "1e-05");
        assert_eq!(format_real(-3.0e-7, 8), "-3e-07");
    }

    #[test]
    fn test_format_real_non_finite() {
        assert_eq!(format_real(f64::INFINITY, 8), "inf");
        assert_eq!(format_real(f64::NAN, 8), "nan");
    }

    #[test]
    fn test_format_vector() {
        assert_eq!(format_vector3(DVec3::new(90.0, 0.0, -45.5)), "90, 0, -45.5");
    }
}
