// ============================================================================
// Format Module
// Text <-> Magnitude: the parser and both display formatters
// ============================================================================
//
// Text enters only through the parser; both formatters work outward from an
// exact Magnitude. Each operation is a method on NotationTables, with a free
// function bound to NotationTables::standard().

mod illion;
mod parser;
mod short_form;

pub use illion::to_illion_text;
pub use parser::{parse, parse_or_zero, try_parse};
pub use short_form::{to_short_form, MANTISSA_FRACTION_DIGITS};
