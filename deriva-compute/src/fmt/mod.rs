//! Utility functions to format the numeric coefficients of differentiated terms.

use std::fmt::{self, Write};

/// Formats a coefficient as a standard number.
///
/// Whole numbers are written without a fractional part (`4`, not `4.0`). Any other number is
/// written with the fewest decimal digits that still parse back to the same [`f64`]. The output
/// never depends on the locale.
pub fn fmt_coefficient<F: Write>(f: &mut F, n: f64) -> fmt::Result {
    if !n.is_normal() {
        if n.is_nan() {
            return write!(f, "NaN");
        } else if n.is_infinite() {
            return write!(f, "{}∞", if n.is_sign_negative() { "-" } else { "" });
        } else if n == 0.0 {
            // also catches `-0.0`
            return write!(f, "0");
        }
    }

    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        write!(f, "{}", n as i64)
    } else {
        // `Display` for `f64` prints the shortest representation that round-trips
        write!(f, "{}", n)
    }
}

/// Formats a coefficient into a new [`String`]. See [`fmt_coefficient`].
pub fn format_coefficient(n: f64) -> String {
    let mut s = String::new();
    // writing to a `String` cannot fail
    let _ = fmt_coefficient(&mut s, n);
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers() {
        assert_eq!(format_coefficient(4.0), "4");
        assert_eq!(format_coefficient(-2.0), "-2");
        assert_eq!(format_coefficient(12.0), "12");
        assert_eq!(format_coefficient(1e20), "100000000000000000000");
    }

    #[test]
    fn fractions() {
        assert_eq!(format_coefficient(1.5), "1.5");
        assert_eq!(format_coefficient(-0.25), "-0.25");
        assert_eq!(format_coefficient(1.05), "1.05");
        assert_eq!(format_coefficient(0.1 * 3.0), "0.30000000000000004");
    }

    #[test]
    fn round_trip() {
        for n in [0.1, 2.0 / 3.0, 1e-7, 123.456, -9.75] {
            assert_eq!(format_coefficient(n).parse::<f64>(), Ok(n));
        }
    }

    #[test]
    fn non_normal() {
        assert_eq!(format_coefficient(0.0), "0");
        assert_eq!(format_coefficient(-0.0), "0");
        assert_eq!(format_coefficient(f64::NAN), "NaN");
        assert_eq!(format_coefficient(f64::INFINITY), "∞");
        assert_eq!(format_coefficient(f64::NEG_INFINITY), "-∞");
    }
}
