// ============================================================================
// Operand Interface
// Anything the arithmetic layer can resolve to an exact Magnitude
// ============================================================================

use crate::notation::NotationTables;
use crate::numeric::{Magnitude, NotationResult};

/// A value usable on either side of a suffixed-string operation.
///
/// Text operands go through the parser (and can fail); magnitudes and
/// native integers resolve directly.
pub trait Operand {
    /// Resolve to an exact magnitude using the given tables.
    fn resolve(&self, tables: &NotationTables) -> NotationResult<Magnitude>;
}

impl Operand for str {
    fn resolve(&self, tables: &NotationTables) -> NotationResult<Magnitude> {
        tables.parse(self)
    }
}

impl Operand for String {
    fn resolve(&self, tables: &NotationTables) -> NotationResult<Magnitude> {
        tables.parse(self)
    }
}

impl Operand for Magnitude {
    fn resolve(&self, _tables: &NotationTables) -> NotationResult<Magnitude> {
        Ok(self.clone())
    }
}

impl<T: Operand + ?Sized> Operand for &T {
    fn resolve(&self, tables: &NotationTables) -> NotationResult<Magnitude> {
        (**self).resolve(tables)
    }
}

macro_rules! impl_native_operand {
    ($($t:ty),* $(,)?) => {
        $(
            impl Operand for $t {
                fn resolve(&self, _tables: &NotationTables) -> NotationResult<Magnitude> {
                    Ok(Magnitude::from(*self))
                }
            }
        )*
    };
}

impl_native_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
