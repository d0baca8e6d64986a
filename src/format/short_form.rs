// ============================================================================
// Short-Form Formatter
// Magnitude -> "1.25 k", "-3 M", "12.5 aa"
// ============================================================================

use crate::notation::{exponent_of, NotationTables};
use crate::numeric::{decimal_digits, div_round_half_away, pow10, Magnitude};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

/// Fractional digits shown in a mantissa (the `0.###` display format).
pub const MANTISSA_FRACTION_DIGITS: usize = 3;

/// Group a non-zero value falls in when every multiple of 1000 gets a name:
/// `floor(log10(|value|) / 3)`.
pub(crate) fn natural_group(value: &Magnitude) -> usize {
    (decimal_digits(value.magnitude()) - 1) / 3
}

/// Render a non-negative value scaled by 10^3 as `int[.fff]`, trailing zeros
/// and point stripped.
pub(crate) fn render_mantissa(scaled: &BigInt) -> String {
    let (int_part, frac_part) = scaled.div_rem(&pow10(MANTISSA_FRACTION_DIGITS));
    let frac = frac_part.to_u32().unwrap_or(0);
    if frac == 0 {
        return int_part.to_string();
    }

    let digits = format!("{:0width$}", frac, width = MANTISSA_FRACTION_DIGITS);
    format!("{}.{}", int_part, digits.trim_end_matches('0'))
}

impl NotationTables {
    /// Group used by the short form, clamped to the last tabulated suffix.
    /// `None` for zero.
    pub fn short_form_group(&self, value: &Magnitude) -> Option<usize> {
        if value.is_zero() {
            return None;
        }
        Some(natural_group(value).min(self.last_suffix_index()))
    }

    /// Format a magnitude as a compact suffixed string.
    ///
    /// The mantissa keeps up to three fractional digits (rounded half away
    /// from zero). Values beyond the largest suffix are expressed in that
    /// suffix's scale rather than failing.
    pub fn to_short_form(&self, value: &Magnitude) -> String {
        let group = match self.short_form_group(value) {
            Some(group) => group,
            None => return "0".to_string(),
        };

        let divisor = pow10(exponent_of(group));
        let scaled = div_round_half_away(
            &(value.abs() * pow10(MANTISSA_FRACTION_DIGITS)),
            &divisor,
        );

        let sign = if value.is_negative() { "-" } else { "" };
        let mantissa = render_mantissa(&scaled);
        match self.suffix(group) {
            Some(suffix) if !suffix.is_empty() => format!("{}{} {}", sign, mantissa, suffix),
            _ => format!("{}{}", sign, mantissa),
        }
    }
}

/// Short form with the standard tables.
pub fn to_short_form(value: &Magnitude) -> String {
    NotationTables::standard().to_short_form(value)
}
