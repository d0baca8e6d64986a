// ============================================================================
// Numeric Module
// Exact integer arithmetic underpinning the suffix notation
// ============================================================================
//
// This module provides:
// - Magnitude: the unbounded signed integer every other form derives from
// - DecimalNumeral: lossless decimal token representation
// - NotationError / ConfigError: error types for parsing and table setup
// - integer_sqrt / gcd / lcm on unbounded integers
// - Decimal and f64 conversions for host interop
//
// Design principles:
// - No floating-point operations on the parse/format path
// - All fallible operations return Result (no panics)

mod conversions;
mod errors;
mod math;
mod numeral;

pub use conversions::{magnitude_from_decimal, magnitude_from_f64, magnitude_to_decimal};
pub use errors::{ConfigError, ConfigResult, NotationError, NotationResult};
pub use math::{gcd, integer_sqrt, lcm};
pub use numeral::{decimal_digits, div_round_half_away, pow10, DecimalNumeral, Magnitude};
