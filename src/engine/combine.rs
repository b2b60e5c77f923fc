// src/engine/combine.rs

use std::slice;

use num::BigInt;

/// Distinct factors discovered for one corpus element, kept in order of
/// first appearance so reports and test traces are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedFactors {
    factors: Vec<BigInt>,
}

impl CombinedFactors {
    pub fn insert(&mut self, factor: &BigInt) {
        if !self.factors.contains(factor) {
            self.factors.push(factor.clone());
        }
    }

    pub fn extend_from(&mut self, factors: &[BigInt]) {
        for factor in factors {
            self.insert(factor);
        }
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, BigInt> {
        self.factors.iter()
    }

    pub fn as_slice(&self) -> &[BigInt] {
        &self.factors
    }

    /// Comma-joined decimal token list, e.g. "3,5,7".
    pub fn join_tokens(&self) -> String {
        self.factors
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Per-index union of every factor list derived from a GCD touching
/// that index. Pure aggregation, no side effects.
pub struct FactorAccumulator {
    per_index: Vec<CombinedFactors>,
}

impl FactorAccumulator {
    pub fn new(len: usize) -> Self {
        FactorAccumulator { per_index: vec![CombinedFactors::default(); len] }
    }

    pub fn record(&mut self, index: usize, factors: &[BigInt]) {
        self.per_index[index].extend_from(factors);
    }

    pub fn get(&self, index: usize) -> &CombinedFactors {
        &self.per_index[index]
    }

    pub fn into_sets(self) -> Vec<CombinedFactors> {
        self.per_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(values: &[u64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    #[test]
    fn union_deduplicates_across_contributions() {
        let mut acc = FactorAccumulator::new(1);
        acc.record(0, &big(&[3, 5]));
        acc.record(0, &big(&[5, 7]));
        assert_eq!(acc.get(0).as_slice(), big(&[3, 5, 7]).as_slice());
    }

    #[test]
    fn first_appearance_order_is_kept() {
        let mut set = CombinedFactors::default();
        set.extend_from(&big(&[7, 3, 7, 5, 3]));
        assert_eq!(set.join_tokens(), "7,3,5");
    }

    #[test]
    fn empty_set_joins_to_an_empty_string() {
        assert_eq!(CombinedFactors::default().join_tokens(), "");
    }
}
