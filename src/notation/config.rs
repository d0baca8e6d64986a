// ============================================================================
// Notation Configuration
// Suffix and illion name lists from which lookup tables are built
// ============================================================================

use crate::numeric::{ConfigError, ConfigResult};
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Short-scale suffixes: "", k, M, B, T, Q, then aa..az, ba..bz, ca..cz.
const SHORT_SCALE_HEAD: &[&str] = &["", "k", "M", "B", "T", "Q"];

/// Letters used for the two-letter suffix tiers (aa..cz).
const SUFFIX_TIERS: &[char] = &['a', 'b', 'c'];

/// Illion names up to centillion.
const SHORT_SCALE_ILLIONS: &[&str] = &[
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
    "duodecillion",
    "tredecillion",
    "quattuordecillion",
    "quindecillion",
    "sexdecillion",
    "septendecillion",
    "octodecillion",
    "novemdecillion",
    "vigintillion",
    "centillion",
];

/// Suffix and illion name lists. Index `i` in either list denotes the
/// scale `10^(3·i)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NotationConfig {
    /// Suffix tokens; index 0 must be the empty suffix
    pub suffixes: Vec<String>,

    /// Spelled-out group names; index 0 is normally empty.
    /// May be shorter than `suffixes`; missing groups fall back to `10^N`.
    pub illion_names: Vec<String>,
}

impl NotationConfig {
    /// Create a configuration from explicit lists
    pub fn new<S, I>(suffixes: S, illion_names: I) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
            illion_names: illion_names.into_iter().map(Into::into).collect(),
        }
    }

    /// Builder method: Replace the suffix list
    pub fn with_suffixes<S>(mut self, suffixes: S) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
    {
        self.suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: Replace the illion name list
    pub fn with_illion_names<I>(mut self, illion_names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.illion_names = illion_names.into_iter().map(Into::into).collect();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let base = self.suffixes.first().ok_or(ConfigError::EmptySuffixTable)?;
        if !base.is_empty() {
            return Err(ConfigError::BaseSuffixNotEmpty(base.clone()));
        }

        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(self.suffixes.len());
        for (index, token) in self.suffixes.iter().enumerate() {
            if index > 0 && token.is_empty() {
                return Err(ConfigError::EmptySuffix { index });
            }
            if token.chars().any(char::is_whitespace) {
                return Err(ConfigError::SuffixContainsWhitespace(token.clone()));
            }
            if let Some(first) = seen.insert(token.as_str(), index) {
                return Err(ConfigError::DuplicateSuffix {
                    token: token.clone(),
                    first,
                    second: index,
                });
            }
        }

        Ok(())
    }

    /// Decode a configuration from JSON
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl NotationConfig {
    /// Idle-game short scale
    /// - 84 suffixes: "", k, M, B, T, Q, aa..az, ba..bz, ca..cz
    /// - 23 illion names: thousand .. vigintillion, centillion
    pub fn short_scale() -> Self {
        let tiers = SUFFIX_TIERS
            .iter()
            .flat_map(|first| ('a'..='z').map(move |second| format!("{}{}", first, second)));
        let suffixes = SHORT_SCALE_HEAD
            .iter()
            .map(|s| s.to_string())
            .chain(tiers)
            .collect::<Vec<_>>();

        Self::new(suffixes, SHORT_SCALE_ILLIONS.iter().copied())
    }
}

impl Default for NotationConfig {
    fn default() -> Self {
        Self::short_scale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_scale_preset() {
        let config = NotationConfig::short_scale();

        assert_eq!(config.suffixes.len(), 84);
        assert_eq!(config.suffixes[2], "M");
        assert_eq!(config.suffixes[6], "aa");
        assert_eq!(config.suffixes[31], "az");
        assert_eq!(config.suffixes[32], "ba");
        assert_eq!(config.suffixes[83], "cz");
        assert_eq!(config.illion_names.len(), 23);
        assert_eq!(config.illion_names[22], "centillion");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = NotationConfig::short_scale()
            .with_suffixes(["", "K", "Mil"])
            .with_illion_names(["", "thousand"]);

        assert_eq!(config.suffixes, vec!["", "K", "Mil"]);
        assert_eq!(config.illion_names.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let empty = NotationConfig::new(Vec::<String>::new(), [""]);
        assert_eq!(empty.validate(), Err(ConfigError::EmptySuffixTable));

        let no_base = NotationConfig::new(["k", "M"], [""]);
        assert_eq!(
            no_base.validate(),
            Err(ConfigError::BaseSuffixNotEmpty("k".to_string()))
        );

        let hole = NotationConfig::new(["", "k", ""], [""]);
        assert_eq!(hole.validate(), Err(ConfigError::EmptySuffix { index: 2 }));

        let spaced = NotationConfig::new(["", "k k"], [""]);
        assert_eq!(
            spaced.validate(),
            Err(ConfigError::SuffixContainsWhitespace("k k".to_string()))
        );

        let duplicate = NotationConfig::new(["", "k", "M", "k"], [""]);
        assert_eq!(
            duplicate.validate(),
            Err(ConfigError::DuplicateSuffix {
                token: "k".to_string(),
                first: 1,
                second: 3
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let config = NotationConfig::from_json(
            r#"{"suffixes": ["", "k", "M"], "illion_names": ["", "thousand"]}"#,
        )
        .unwrap();
        assert_eq!(config.suffixes[1], "k");

        assert!(matches!(
            NotationConfig::from_json("{"),
            Err(ConfigError::Malformed(_))
        ));
    }
}
