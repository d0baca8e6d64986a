// ============================================================================
// Suffixed Text Parser
// "<numeral> [<suffix>]" -> exact Magnitude
// ============================================================================

use crate::notation::NotationTables;
use crate::numeric::{DecimalNumeral, Magnitude, NotationError, NotationResult};
use num_traits::Zero;

impl NotationTables {
    /// Parse suffixed text such as `"12.5 aa"` or `"-3 M"` into an exact magnitude.
    ///
    /// The numeral is read without loss of digits and scaled by the suffix
    /// exponent; a remaining fraction is rounded half away from zero.
    /// Numeral and suffix must be separated by whitespace, so `"1.2B"` is an
    /// invalid numeral rather than 1.2 billion.
    ///
    /// # Errors
    /// - `EmptyInput` for blank text
    /// - `InvalidNumeral` when the first token is not a decimal number
    /// - `UnknownSuffix` when the rest of the text is not a registered suffix
    pub fn parse(&self, text: &str) -> NotationResult<Magnitude> {
        let text = text.trim();
        if text.is_empty() {
            return Err(NotationError::EmptyInput);
        }

        let (numeral_token, suffix_token) = match text.find(char::is_whitespace) {
            Some(pos) => (&text[..pos], text[pos..].trim_start()),
            None => (text, ""),
        };

        let numeral: DecimalNumeral = numeral_token.parse()?;
        let exponent = self
            .suffix_to_exponent(suffix_token)
            .ok_or_else(|| NotationError::UnknownSuffix(suffix_token.to_string()))?;

        Ok(numeral.scale_by_power_of_ten(exponent))
    }

    /// Non-failing parse for live-preview paths; `None` on any parse error.
    pub fn try_parse(&self, text: &str) -> Option<Magnitude> {
        match self.parse(text) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::debug!(input = text, %error, "suffixed text rejected");
                None
            },
        }
    }

    /// Non-failing parse reporting success alongside the value (zero on failure).
    pub fn parse_or_zero(&self, text: &str) -> (bool, Magnitude) {
        match self.try_parse(text) {
            Some(value) => (true, value),
            None => (false, Magnitude::zero()),
        }
    }
}

/// Parse suffixed text with the standard tables.
pub fn parse(text: &str) -> NotationResult<Magnitude> {
    NotationTables::standard().parse(text)
}

/// `try_parse` with the standard tables.
pub fn try_parse(text: &str) -> Option<Magnitude> {
    NotationTables::standard().try_parse(text)
}

/// `parse_or_zero` with the standard tables.
pub fn parse_or_zero(text: &str) -> (bool, Magnitude) {
    NotationTables::standard().parse_or_zero(text)
}
