// ============================================================================
// Illion Formatter
// Magnitude -> "1 million", "12 quintillion", "5 10^72"
// ============================================================================

use super::short_form::natural_group;
use crate::notation::{exponent_of, NotationTables};
use crate::numeric::{pow10, Magnitude};
use num_traits::Zero;

impl NotationTables {
    /// Group used by the illion text. Not clamped to the suffix table;
    /// groups past the illion table get a `10^N` label. `None` for zero.
    pub fn illion_group(&self, value: &Magnitude) -> Option<usize> {
        if value.is_zero() {
            None
        } else {
            Some(natural_group(value))
        }
    }

    /// Spell a magnitude out with its group name.
    ///
    /// The mantissa is truncated toward zero, so `1_999_999` reads
    /// `"1 million"`.
    pub fn to_illion_text(&self, value: &Magnitude) -> String {
        let group = match self.illion_group(value) {
            Some(group) => group,
            None => return "zero".to_string(),
        };

        let mantissa = value / pow10(exponent_of(group));
        let name = self.illion_name(group);
        if name.is_empty() {
            mantissa.to_string()
        } else {
            format!("{} {}", mantissa, name)
        }
    }
}

/// Illion text with the standard tables.
pub fn to_illion_text(value: &Magnitude) -> String {
    NotationTables::standard().to_illion_text(value)
}
