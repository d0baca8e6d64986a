// ============================================================================
// LargeNumber Value Type
// Magnitude paired with its cached short-form text
// ============================================================================

use crate::arithmetic::Operand;
use crate::notation::NotationTables;
use crate::numeric::{Magnitude, NotationError, NotationResult};
use num_traits::Zero;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

/// A large number as a host application stores it: the exact magnitude
/// plus the short-form text last rendered for it.
///
/// The text is always `to_short_form(value)` under the standard tables.
/// Construction is explicit (`from_text`, `parse_text`, `from_magnitude`);
/// there are no implicit text/value coercions.
///
/// # Example
/// ```
/// use large_number::domain::LargeNumber;
///
/// let gold = LargeNumber::from_text("12.5 aa");
/// assert_eq!(gold.text(), "12.5 aa");
/// assert_eq!(gold.illion_text(), "12 quintillion");
///
/// let typo = LargeNumber::from_text("12.5aa");
/// assert!(typo.is_zero());
/// ```
#[derive(Clone)]
pub struct LargeNumber {
    value: Magnitude,
    text: String,
}

impl LargeNumber {
    /// Zero, displayed as "0"
    pub fn zero() -> Self {
        Self::from_magnitude(Magnitude::zero())
    }

    /// Wrap an exact magnitude.
    pub fn from_magnitude(value: Magnitude) -> Self {
        let text = NotationTables::standard().to_short_form(&value);
        Self { value, text }
    }

    /// Parse suffixed text, falling back to zero when it is invalid.
    pub fn from_text(text: &str) -> Self {
        match Self::parse_text(text) {
            Ok(number) => number,
            Err(error) => {
                tracing::debug!(input = text, %error, "large number text rejected, using zero");
                Self::zero()
            },
        }
    }

    /// Parse suffixed text strictly.
    ///
    /// # Errors
    /// Any parser error, unchanged.
    pub fn parse_text(text: &str) -> NotationResult<Self> {
        NotationTables::standard()
            .parse(text)
            .map(Self::from_magnitude)
    }

    /// The exact magnitude.
    #[inline]
    pub fn value(&self) -> &Magnitude {
        &self.value
    }

    /// Consume and return the magnitude.
    #[inline]
    pub fn into_magnitude(self) -> Magnitude {
        self.value
    }

    /// Cached short-form text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Spelled-out form.
    pub fn illion_text(&self) -> String {
        NotationTables::standard().to_illion_text(&self.value)
    }

    /// Replace the magnitude and refresh the cached text.
    pub fn set_value(&mut self, value: Magnitude) {
        *self = Self::from_magnitude(value);
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for LargeNumber {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for LargeNumber {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for LargeNumber {}

impl PartialOrd for LargeNumber {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LargeNumber {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for LargeNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl Neg for LargeNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_magnitude(-self.value)
    }
}

impl Add for LargeNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_magnitude(self.value + rhs.value)
    }
}

impl Sub for LargeNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_magnitude(self.value - rhs.value)
    }
}

impl Mul for LargeNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_magnitude(self.value * rhs.value)
    }
}

impl Operand for LargeNumber {
    fn resolve(&self, _tables: &NotationTables) -> NotationResult<Magnitude> {
        Ok(self.value.clone())
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for LargeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LargeNumber({}, value={})", self.text, self.value)
    }
}

impl fmt::Display for LargeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for LargeNumber {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_text(s)
    }
}

// ============================================================================
// Serialization (as short-form text)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for LargeNumber {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LargeNumber {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse_text(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_from_text() {
        let n = LargeNumber::from_text("100 M");
        assert_eq!(n.value(), &BigInt::from(100_000_000));
        assert_eq!(n.text(), "100 M");
        assert_eq!(n.to_string(), "100 M");
    }

    #[test]
    fn test_from_text_normalizes() {
        let n = LargeNumber::from_text("  1500 ");
        assert_eq!(n.text(), "1.5 k");
    }

    #[test]
    fn test_from_text_invalid_is_zero() {
        for bad in ["", "1.2B", "5 zz"] {
            let n = LargeNumber::from_text(bad);
            assert!(n.is_zero());
            assert_eq!(n.text(), "0");
        }
    }

    #[test]
    fn test_parse_text_is_strict() {
        assert_eq!(
            LargeNumber::parse_text("5 zz"),
            Err(NotationError::UnknownSuffix("zz".to_string()))
        );
        let n: LargeNumber = "2 k".parse().unwrap();
        assert_eq!(n.value(), &BigInt::from(2_000));
    }

    #[test]
    fn test_set_value_refreshes_text() {
        let mut n = LargeNumber::default();
        assert_eq!(n.text(), "0");

        n.set_value(BigInt::from(1_250));
        assert_eq!(n.text(), "1.25 k");
        assert_eq!(n.illion_text(), "1 thousand");
    }

    #[test]
    fn test_operators() {
        let a = LargeNumber::from_text("1 k");
        let b = LargeNumber::from_text("500");

        assert_eq!((a.clone() + b.clone()).text(), "1.5 k");
        assert_eq!((b.clone() - a.clone()).text(), "-500");
        assert_eq!((a.clone() * b.clone()).text(), "500 k");
        assert_eq!((-a.clone()).text(), "-1 k");
        assert!(a > b);
    }

    #[test]
    fn test_as_operand() {
        let a = LargeNumber::from_text("1 k");
        assert_eq!(
            crate::arithmetic::add_to_short_form(&a, "1 k").unwrap(),
            "2 k"
        );
    }

    #[test]
    fn test_equality_ignores_input_spelling() {
        assert_eq!(LargeNumber::from_text("1 k"), LargeNumber::from_text("1000"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_text() {
        let n = LargeNumber::from_text("12.5 aa");
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, "\"12.5 aa\"");

        let back: LargeNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);

        assert!(serde_json::from_str::<LargeNumber>("\"1.2B\"").is_err());
    }
}
