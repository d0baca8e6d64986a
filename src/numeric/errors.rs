// ============================================================================
// Numeric Errors
// Error types for parsing suffixed text, table configuration and math helpers
// ============================================================================

use std::fmt;

/// Errors raised while turning suffixed text into a magnitude, or by the
/// math utilities.
///
/// Every variant describes a property of the input; none is transient, so
/// retrying the same call always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NotationError {
    /// Input was empty or whitespace only
    EmptyInput,
    /// Numeral token is not a plain signed decimal number
    InvalidNumeral(String),
    /// Suffix token is not registered in the suffix table
    UnknownSuffix(String),
    /// Square root requested for a negative value
    NegativeOperand,
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::EmptyInput => write!(f, "empty input: nothing to parse"),
            NotationError::InvalidNumeral(token) => {
                write!(f, "invalid numeral: '{}' is not a decimal number", token)
            },
            NotationError::UnknownSuffix(token) => {
                write!(f, "unknown suffix: '{}' is not a registered suffix", token)
            },
            NotationError::NegativeOperand => {
                write!(f, "negative operand: square root of a negative value")
            },
        }
    }
}

impl std::error::Error for NotationError {}

/// Result type alias for parsing and math operations
pub type NotationResult<T> = Result<T, NotationError>;

/// Errors raised while building suffix/illion tables from a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The suffix table has no entries at all
    EmptySuffixTable,
    /// Index 0 must be the empty suffix (scale 1)
    BaseSuffixNotEmpty(String),
    /// An empty token appears past index 0
    EmptySuffix { index: usize },
    /// A token contains whitespace and could never be parsed back
    SuffixContainsWhitespace(String),
    /// The same token is registered twice
    DuplicateSuffix {
        token: String,
        first: usize,
        second: usize,
    },
    /// Serialized configuration could not be decoded
    #[cfg(feature = "serde")]
    Malformed(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptySuffixTable => write!(f, "suffix table cannot be empty"),
            ConfigError::BaseSuffixNotEmpty(token) => {
                write!(f, "suffix at index 0 must be empty, found '{}'", token)
            },
            ConfigError::EmptySuffix { index } => {
                write!(f, "suffix at index {} is empty", index)
            },
            ConfigError::SuffixContainsWhitespace(token) => {
                write!(f, "suffix '{}' contains whitespace", token)
            },
            ConfigError::DuplicateSuffix {
                token,
                first,
                second,
            } => write!(
                f,
                "suffix '{}' registered twice (indices {} and {})",
                token, first, second
            ),
            #[cfg(feature = "serde")]
            ConfigError::Malformed(reason) => write!(f, "malformed configuration: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result type alias for table construction
pub type ConfigResult<T> = Result<T, ConfigError>;
