// ============================================================================
// Decimal Conversions
// Bridges between rust_decimal / f64 and the unbounded Magnitude type
// ============================================================================

use super::errors::{NotationError, NotationResult};
use super::numeral::{pow10, Magnitude};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// Convert a `Decimal` to a magnitude, truncating toward zero.
///
/// This is intended for API boundaries (values that arrive as decimals from
/// elsewhere in a host application).
pub fn magnitude_from_decimal(d: Decimal) -> Magnitude {
    BigInt::from(d.mantissa()) / pow10(d.scale() as usize)
}

/// Convert an `f64` to a magnitude by way of `Decimal`, truncating toward zero.
///
/// # Errors
/// Returns `InvalidNumeral` for NaN, infinities, and values outside the
/// `Decimal` range.
pub fn magnitude_from_f64(value: f64) -> NotationResult<Magnitude> {
    Decimal::from_f64(value)
        .map(magnitude_from_decimal)
        .ok_or_else(|| NotationError::InvalidNumeral(value.to_string()))
}

/// Convert a magnitude to a `Decimal`, if it fits.
///
/// This is intended for display/debugging and host interop only.
pub fn magnitude_to_decimal(value: &Magnitude) -> Option<Decimal> {
    value.to_i128().and_then(Decimal::from_i128)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal_truncates() {
        assert_eq!(magnitude_from_decimal(Decimal::new(12345, 2)), BigInt::from(123));
        assert_eq!(magnitude_from_decimal(Decimal::new(19, 1)), BigInt::from(1));
        assert_eq!(magnitude_from_decimal(Decimal::new(1235, 1)), BigInt::from(123));
        assert_eq!(magnitude_from_decimal(Decimal::new(-1235, 1)), BigInt::from(-123));
        assert_eq!(magnitude_from_decimal(Decimal::new(-9, 1)), BigInt::from(0));
        assert_eq!(magnitude_from_decimal(Decimal::MAX).to_string(), Decimal::MAX.to_string());
    }

    #[test]
    fn test_from_f64_truncates() {
        assert_eq!(magnitude_from_f64(1_500.4).unwrap(), BigInt::from(1_500));
        assert_eq!(magnitude_from_f64(1.9).unwrap(), BigInt::from(1));
        assert_eq!(magnitude_from_f64(-2.5).unwrap(), BigInt::from(-2));
        assert_eq!(magnitude_from_f64(-1.9).unwrap(), BigInt::from(-1));
        assert_eq!(magnitude_from_f64(1e20).unwrap(), crate::numeric::pow10(20));
    }

    #[test]
    fn test_from_f64_rejects_non_finite() {
        assert!(matches!(
            magnitude_from_f64(f64::NAN),
            Err(NotationError::InvalidNumeral(_))
        ));
        assert!(magnitude_from_f64(f64::INFINITY).is_err());
        assert!(magnitude_from_f64(1e40).is_err());
    }

    #[test]
    fn test_to_decimal() {
        let d = magnitude_to_decimal(&BigInt::from(1_250)).unwrap();
        assert_eq!(d.to_string(), "1250");

        let huge: BigInt = "1000000000000000000000000000000".parse().unwrap();
        assert_eq!(magnitude_to_decimal(&huge), None);
    }
}
