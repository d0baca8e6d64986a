// ============================================================================
// Arithmetic Module
// Arithmetic directly on suffixed strings, magnitudes and native integers
// ============================================================================
//
// A thin veneer over the parser and formatters: operands are resolved via
// the parser, combined on exact integers, then optionally rendered. It adds
// no error kinds of its own.

mod operand;
mod ops;

pub use operand::Operand;
pub use ops::{
    add, add_to_illion_form, add_to_short_form, evaluate, evaluate_formatted, multiply,
    multiply_to_illion_form, multiply_to_short_form, subtract, subtract_to_illion_form,
    subtract_to_short_form, BinaryOp, Presentation,
};
