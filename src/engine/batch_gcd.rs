// src/engine/batch_gcd.rs
//
// The batch-GCD trick: one running product plus N exact divisions and N
// GCDs gives, for every corpus element, gcd(numbers[i], product of the
// rest) without the O(N^2) pairwise sweep. A single g_i conflates
// factors shared with any other element; the pairwise matrix is the
// disambiguation path.

use log::{info, trace};
use num::{BigInt, Integer, One, Zero};

use crate::core::corpus::Corpus;
use crate::core::error::{ScanError, ScanPhase};

/// One GCD per corpus index: gcd(numbers[i], product of the rest).
/// A result of 1 means no factor shared with any other element.
///
/// The division of the corpus product by numbers[i] is exact by
/// construction; a nonzero remainder means the product is wrong or the
/// element is zero, and fails the run.
pub fn shared_factor_gcds(corpus: &Corpus) -> Result<Vec<BigInt>, ScanError> {
    let numbers = corpus.as_slice();
    let mut gcds = Vec::new();
    gcds.try_reserve_exact(numbers.len())
        .map_err(|_| ScanError::Allocation {
            phase: ScanPhase::ProductPass,
            requested: numbers.len(),
        })?;

    if numbers.is_empty() {
        return Ok(gcds);
    }

    info!("batch gcd over {} numbers", numbers.len());
    let product = numbers.iter().fold(BigInt::one(), |acc, n| acc * n);

    for (i, n) in numbers.iter().enumerate() {
        if n.is_zero() {
            return Err(ScanError::ArithmeticInvariant {
                phase: ScanPhase::ExactDivision,
                index: i,
                detail: "corpus element is zero".to_string(),
            });
        }
        let (quotient, remainder) = product.div_rem(n);
        if !remainder.is_zero() {
            return Err(ScanError::ArithmeticInvariant {
                phase: ScanPhase::ExactDivision,
                index: i,
                detail: format!("nonzero remainder {} dividing the corpus product", remainder),
            });
        }
        let g = n.gcd(&quotient);
        trace!("g[{}] = {}", i, g);
        gcds.push(g);
    }
    Ok(gcds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus_of(values: &[u64]) -> Corpus {
        Corpus::new(values.iter().map(|&v| BigInt::from(v)).collect())
    }

    #[test]
    fn planted_common_factors_surface() {
        // pairwise shared factors 3, 5, 7
        let gcds = shared_factor_gcds(&corpus_of(&[15, 21, 35])).unwrap();
        assert!(gcds[0].is_multiple_of(&BigInt::from(3)));
        assert!(gcds[0].is_multiple_of(&BigInt::from(5)));
        assert!(gcds[1].is_multiple_of(&BigInt::from(3)));
        assert!(gcds[1].is_multiple_of(&BigInt::from(7)));
        assert!(gcds[2].is_multiple_of(&BigInt::from(5)));
        assert!(gcds[2].is_multiple_of(&BigInt::from(7)));
    }

    #[test]
    fn coprime_corpus_yields_all_ones() {
        let gcds = shared_factor_gcds(&corpus_of(&[97, 101])).unwrap();
        assert!(gcds.iter().all(|g| g.is_one()));
    }

    #[test]
    fn singleton_corpus_shares_nothing() {
        let gcds = shared_factor_gcds(&corpus_of(&[15])).unwrap();
        assert_eq!(gcds, vec![BigInt::one()]);
    }

    #[test]
    fn empty_corpus_is_a_noop() {
        assert!(shared_factor_gcds(&corpus_of(&[])).unwrap().is_empty());
    }

    #[test]
    fn zero_element_violates_the_division_invariant() {
        let err = shared_factor_gcds(&corpus_of(&[15, 0, 35])).unwrap_err();
        assert!(matches!(
            err,
            ScanError::ArithmeticInvariant { phase: ScanPhase::ExactDivision, .. }
        ));
    }
}
