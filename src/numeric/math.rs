// ============================================================================
// Math Utilities
// Integer square root, GCD and LCM on unbounded integers
// ============================================================================

use super::errors::{NotationError, NotationResult};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Floor square root of a non-negative integer.
///
/// Newton's method seeded at `1 << (bits / 2)`. One step from any positive
/// seed lands at or above the root; from there the iterates decrease
/// strictly until the floor root is reached.
///
/// # Errors
/// Returns `NegativeOperand` if `n < 0`.
pub fn integer_sqrt(n: &BigInt) -> NotationResult<BigInt> {
    if n.is_negative() {
        return Err(NotationError::NegativeOperand);
    }
    if n.is_zero() {
        return Ok(BigInt::zero());
    }

    let seed = BigInt::one() << (n.bits() / 2);
    let mut x: BigInt = (&seed + n / &seed) >> 1usize;

    loop {
        let y: BigInt = (&x + n / &x) >> 1usize;
        if y >= x {
            return Ok(x);
        }
        x = y;
    }
}

/// Greatest common divisor (Euclid). Always non-negative; `gcd(a, 0) == |a|`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a.abs()
}

/// Least common multiple. Zero if either operand is zero, otherwise non-negative.
pub fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }
    (a / gcd(a, b) * b).abs()
}
