// ============================================================================
// Suffixed-String Arithmetic
// parse + native integer arithmetic + optional formatting, composed
// ============================================================================

use super::operand::Operand;
use crate::notation::NotationTables;
use crate::numeric::{Magnitude, NotationResult};

/// Binary operation on exact magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
}

impl BinaryOp {
    /// Apply the operation.
    #[inline]
    pub fn apply(self, lhs: Magnitude, rhs: Magnitude) -> Magnitude {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Subtract => lhs - rhs,
            BinaryOp::Multiply => lhs * rhs,
        }
    }
}

/// Which display form a formatted result is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Presentation {
    /// `"1.5 k"`
    #[default]
    ShortForm,
    /// `"1 thousand"`
    IllionText,
}

impl Presentation {
    /// Render a magnitude with the given tables.
    pub fn render(self, tables: &NotationTables, value: &Magnitude) -> String {
        match self {
            Presentation::ShortForm => tables.to_short_form(value),
            Presentation::IllionText => tables.to_illion_text(value),
        }
    }
}

impl NotationTables {
    /// Resolve both operands and apply `op`.
    ///
    /// The left operand is resolved first; its failure is returned
    /// unchanged before the right operand is looked at.
    pub fn evaluate<A, B>(&self, op: BinaryOp, lhs: A, rhs: B) -> NotationResult<Magnitude>
    where
        A: Operand,
        B: Operand,
    {
        let lhs = lhs.resolve(self)?;
        let rhs = rhs.resolve(self)?;
        Ok(op.apply(lhs, rhs))
    }

    /// `evaluate`, then render the result.
    pub fn evaluate_formatted<A, B>(
        &self,
        op: BinaryOp,
        lhs: A,
        rhs: B,
        presentation: Presentation,
    ) -> NotationResult<String>
    where
        A: Operand,
        B: Operand,
    {
        let value = self.evaluate(op, lhs, rhs)?;
        Ok(presentation.render(self, &value))
    }
}

// ============================================================================
// Free Functions (standard tables)
// ============================================================================

/// `evaluate` with the standard tables.
pub fn evaluate<A: Operand, B: Operand>(
    op: BinaryOp,
    lhs: A,
    rhs: B,
) -> NotationResult<Magnitude> {
    NotationTables::standard().evaluate(op, lhs, rhs)
}

/// `evaluate_formatted` with the standard tables.
pub fn evaluate_formatted<A: Operand, B: Operand>(
    op: BinaryOp,
    lhs: A,
    rhs: B,
    presentation: Presentation,
) -> NotationResult<String> {
    NotationTables::standard().evaluate_formatted(op, lhs, rhs, presentation)
}

macro_rules! binary_op_fns {
    ($op:expr, $value:ident, $short:ident, $illion:ident, $verb:literal) => {
        #[doc = concat!("Resolve both operands and ", $verb, " them.")]
        pub fn $value<A: Operand, B: Operand>(lhs: A, rhs: B) -> NotationResult<Magnitude> {
            evaluate($op, lhs, rhs)
        }

        #[doc = concat!("Resolve both operands, ", $verb, " them, and render the short form.")]
        pub fn $short<A: Operand, B: Operand>(lhs: A, rhs: B) -> NotationResult<String> {
            evaluate_formatted($op, lhs, rhs, Presentation::ShortForm)
        }

        #[doc = concat!("Resolve both operands, ", $verb, " them, and render the illion text.")]
        pub fn $illion<A: Operand, B: Operand>(lhs: A, rhs: B) -> NotationResult<String> {
            evaluate_formatted($op, lhs, rhs, Presentation::IllionText)
        }
    };
}

binary_op_fns!(BinaryOp::Add, add, add_to_short_form, add_to_illion_form, "add");
binary_op_fns!(
    BinaryOp::Subtract,
    subtract,
    subtract_to_short_form,
    subtract_to_illion_form,
    "subtract"
);
binary_op_fns!(
    BinaryOp::Multiply,
    multiply,
    multiply_to_short_form,
    multiply_to_illion_form,
    "multiply"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NotationError;
    use num_bigint::BigInt;

    #[test]
    fn test_add_strings() {
        assert_eq!(add("1 k", "500").unwrap(), BigInt::from(1_500));
        assert_eq!(add_to_short_form("1 k", "500").unwrap(), "1.5 k");
        assert_eq!(add_to_illion_form("1 k", "500").unwrap(), "1 thousand");
    }

    #[test]
    fn test_mixed_operands() {
        let base = BigInt::from(250);
        assert_eq!(add("1 k", &base).unwrap(), BigInt::from(1_250));
        assert_eq!(add(base.clone(), "1 k").unwrap(), BigInt::from(1_250));
        assert_eq!(add("1 k", 5i64).unwrap(), BigInt::from(1_005));
        assert_eq!(add(2u32, 3i8).unwrap(), BigInt::from(5));
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract("1 M", "1 k").unwrap(), BigInt::from(999_000));
        assert_eq!(subtract_to_short_form("1 M", "1 k").unwrap(), "999 k");
        assert_eq!(subtract_to_short_form("1 k", "1 M").unwrap(), "-999 k");
        assert_eq!(subtract_to_short_form("5 B", "5 B").unwrap(), "0");
        assert_eq!(subtract_to_illion_form("2 B", "1 k").unwrap(), "1 billion");
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply_to_short_form("2 M", "3 k").unwrap(), "6 B");
        assert_eq!(multiply_to_short_form("1.5 k", 2).unwrap(), "3 k");
        assert_eq!(multiply("1 aa", "1 aa").unwrap(), crate::numeric::pow10(36));
        assert_eq!(multiply_to_illion_form("1 M", "1 M").unwrap(), "1 trillion");
    }

    #[test]
    fn test_failure_propagates_unchanged() {
        assert_eq!(add("", "1 k"), Err(NotationError::EmptyInput));
        assert_eq!(
            add("1 k", "1k"),
            Err(NotationError::InvalidNumeral("1k".to_string()))
        );
        // Left operand fails first
        assert_eq!(
            multiply("x", "1 zz"),
            Err(NotationError::InvalidNumeral("x".to_string()))
        );
        assert_eq!(
            subtract_to_short_form(10, "1 zz"),
            Err(NotationError::UnknownSuffix("zz".to_string()))
        );
    }

    #[test]
    fn test_binary_op_apply() {
        let (a, b) = (BigInt::from(7), BigInt::from(3));
        assert_eq!(BinaryOp::Add.apply(a.clone(), b.clone()), BigInt::from(10));
        assert_eq!(BinaryOp::Subtract.apply(a.clone(), b.clone()), BigInt::from(4));
        assert_eq!(BinaryOp::Multiply.apply(a, b), BigInt::from(21));
    }

    #[test]
    fn test_presentation_render() {
        let tables = NotationTables::standard();
        let value = BigInt::from(2_500_000);
        assert_eq!(Presentation::ShortForm.render(tables, &value), "2.5 M");
        assert_eq!(Presentation::IllionText.render(tables, &value), "2 million");
        assert_eq!(Presentation::default(), Presentation::ShortForm);
    }
}
