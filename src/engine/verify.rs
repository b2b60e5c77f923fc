// src/engine/verify.rs

use num::{BigInt, Integer, One, Zero};

use crate::engine::combine::CombinedFactors;

/// True when `n` divides out completely by its combined factors, i.e.
/// the number is a pure product of factors it shares with the rest of
/// the corpus. An empty factor set explains nothing, so the verdict is
/// false unconditionally.
///
/// Factors are applied in set order for reproducible traces; the boolean
/// result itself does not depend on the order.
pub fn fully_explained(n: &BigInt, factors: &CombinedFactors) -> bool {
    if factors.is_empty() {
        return false;
    }
    let mut working = n.clone();
    for factor in factors.iter() {
        // a unit divisor would divide forever
        if factor <= &BigInt::one() {
            continue;
        }
        loop {
            let (quotient, remainder) = working.div_rem(factor);
            if !remainder.is_zero() {
                break;
            }
            working = quotient;
        }
    }
    working.is_one()
}
