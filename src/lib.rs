// ============================================================================
// Large Number Library
// Exact arbitrary-magnitude numbers from suffixed text and back
// ============================================================================

//! # Large Number
//!
//! Converts human-entered suffixed numerals (`"12.5 aa"`, `"100 M"`) into an
//! exact, unbounded integer and renders it back as a short suffixed string or
//! as spelled-out "illion" text.
//!
//! ## Features
//!
//! - **Lossless parsing**: the numeral keeps every digit it was typed with
//! - **Short form** with up to three fractional digits (`1250` -> `"1.25 k"`)
//! - **Illion text** with a `10^N` fallback past the name table
//! - **Arithmetic on suffixed strings**, magnitudes and native integers
//! - **Configurable tables**, with a shared immutable short-scale preset
//!
//! ## Example
//!
//! ```rust
//! use large_number::prelude::*;
//! use num_bigint::BigInt;
//!
//! let value = parse("12.5 aa").unwrap();
//! assert_eq!(value, "12500000000000000000".parse::<BigInt>().unwrap());
//!
//! assert_eq!(to_short_form(&BigInt::from(1250)), "1.25 k");
//! assert_eq!(to_illion_text(&BigInt::from(1_000_000)), "1 million");
//!
//! // Arithmetic straight on suffixed text
//! assert_eq!(add_to_short_form("1 k", "500").unwrap(), "1.5 k");
//!
//! // Glued suffixes are not part of the grammar
//! assert!(matches!(parse("1.2B"), Err(NotationError::InvalidNumeral(_))));
//! ```

pub mod arithmetic;
pub mod domain;
pub mod format;
pub mod notation;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::arithmetic::{
        add, add_to_illion_form, add_to_short_form, evaluate, evaluate_formatted, multiply,
        multiply_to_illion_form, multiply_to_short_form, subtract, subtract_to_illion_form,
        subtract_to_short_form, BinaryOp, Operand, Presentation,
    };
    pub use crate::domain::LargeNumber;
    pub use crate::format::{parse, parse_or_zero, to_illion_text, to_short_form, try_parse};
    pub use crate::notation::{NotationConfig, NotationTables};
    pub use crate::numeric::{
        gcd, integer_sqrt, lcm, ConfigError, Magnitude, NotationError, NotationResult,
    };
}
