// ============================================================================
// Decimal Numeral
// Exact representation of a signed decimal token and integer scaling helpers
// ============================================================================

use super::errors::NotationError;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::fmt;

/// Magnitude type: an exact signed integer of unbounded size.
pub type Magnitude = BigInt;

/// Compute 10^exp on the unbounded integer type.
#[inline]
pub fn pow10(exp: usize) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exp)
}

/// Divide rounding half away from zero.
///
/// `divisor` must be positive.
pub fn div_round_half_away(dividend: &BigInt, divisor: &BigInt) -> BigInt {
    debug_assert!(divisor.is_positive());
    let (quotient, remainder) = dividend.div_rem(divisor);
    let twice = remainder.abs() << 1usize;
    if &twice >= divisor {
        match dividend.sign() {
            Sign::Minus => quotient - BigInt::one(),
            _ => quotient + BigInt::one(),
        }
    } else {
        quotient
    }
}

/// Number of decimal digits in an unsigned value (`1` for zero).
///
/// Estimated from the bit length, then corrected against powers of ten, so
/// no decimal string is built.
pub fn decimal_digits(value: &BigUint) -> usize {
    if value.is_zero() {
        return 1;
    }
    // floor((bits - 1) × log10 2) + 1, with log10 2 rounded down: never too high
    let mut digits = ((value.bits() - 1) * 301_029 / 1_000_000 + 1) as usize;
    let mut bound = num_traits::pow(BigUint::from(10u8), digits);
    while *value >= bound {
        digits += 1;
        bound *= 10u8;
    }
    digits
}

/// A decimal number parsed without loss: `unscaled × 10^-scale`.
///
/// # Example
/// ```ignore
/// let n: DecimalNumeral = "-12.50".parse()?;
/// assert_eq!(n.unscaled(), &BigInt::from(-1250));
/// assert_eq!(n.scale(), 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct DecimalNumeral {
    unscaled: BigInt,
    scale: usize,
}

impl DecimalNumeral {
    /// Create from an unscaled integer and a count of fractional digits.
    pub fn new(unscaled: BigInt, scale: usize) -> Self {
        Self { unscaled, scale }
    }

    /// Digits of the numeral with the decimal point removed, signed.
    #[inline]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Number of fractional digits the token carried.
    #[inline]
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Value of `self × 10^exponent`, rounded half away from zero.
    pub fn scale_by_power_of_ten(&self, exponent: usize) -> BigInt {
        if exponent >= self.scale {
            &self.unscaled * pow10(exponent - self.scale)
        } else {
            div_round_half_away(&self.unscaled, &pow10(self.scale - exponent))
        }
    }
}

impl fmt::Debug for DecimalNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecimalNumeral({}, scale={})",
            self.unscaled, self.scale
        )
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for DecimalNumeral {
    type Err = NotationError;

    /// Parse a plain decimal token.
    ///
    /// # Examples
    /// - "123" -> 123, scale 0
    /// - "12.5" -> 125, scale 1
    /// - "-.25" -> -25, scale 2
    /// - "+7." -> 7, scale 0
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NotationError::InvalidNumeral(s.to_string());

        let (is_negative, body) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (false, rest)
        } else {
            (false, s)
        };

        let (int_str, frac_str) = match body.find('.') {
            Some(pos) => (&body[..pos], &body[pos + 1..]),
            None => (body, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(invalid());
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_str) || !all_digits(frac_str) {
            return Err(invalid());
        }

        let mut digits = String::with_capacity(int_str.len() + frac_str.len());
        digits.push_str(int_str);
        digits.push_str(frac_str);

        let magnitude = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        let sign = if magnitude.is_zero() {
            Sign::NoSign
        } else if is_negative {
            Sign::Minus
        } else {
            Sign::Plus
        };

        Ok(Self {
            unscaled: BigInt::from_biguint(sign, magnitude),
            scale: frac_str.len(),
        })
    }
}
