// src/engine/factorize.rs
//
// Trial-division factorization of shared GCD values. Shared factors are
// by hypothesis small reused primes, so trial division is the right
// tool here; the engine never factors a value that shares nothing with
// the corpus.

use log::{debug, warn};
use num::{BigInt, Integer, One, ToPrimitive};
use serde::Deserialize;

/// How wide a GCD value the factorizer is willing to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FactorMode {
    /// Full-width big-integer trial division.
    BigInt,
    /// Legacy fast mode: a value that does not fit a machine word is
    /// skipped entirely, so factors above the word range are missed.
    WordCapped,
}

#[derive(Debug, Clone)]
pub struct FactorOptions {
    pub mode: FactorMode,
    /// Ceiling on trial candidates, bounding the worst-case sweep; a
    /// residual left unfactored above the ceiling is dropped with a
    /// warning.
    pub candidate_limit: Option<u64>,
}

impl Default for FactorOptions {
    fn default() -> Self {
        FactorOptions { mode: FactorMode::BigInt, candidate_limit: None }
    }
}

/// Distinct primes dividing `n`, in ascending order. `1` yields an
/// empty list; a prime yields itself. Factor 2 is removed eagerly, then
/// odd candidates are swept with each confirmed factor divided out
/// completely before advancing.
pub fn distinct_prime_factors(n: &BigInt, options: &FactorOptions) -> Vec<BigInt> {
    if n <= &BigInt::one() {
        return Vec::new();
    }
    match options.mode {
        FactorMode::WordCapped => match n.to_u64() {
            Some(word) => factor_word(word, options.candidate_limit),
            None => {
                debug!("gcd value {} exceeds the machine word, skipped in word-capped mode", n);
                Vec::new()
            }
        },
        // word-width values still take the fast path
        FactorMode::BigInt => match n.to_u64() {
            Some(word) => factor_word(word, options.candidate_limit),
            None => factor_bigint(n, options.candidate_limit),
        },
    }
}

fn factor_word(mut n: u64, limit: Option<u64>) -> Vec<BigInt> {
    let mut factors = Vec::new();
    if n % 2 == 0 {
        factors.push(BigInt::from(2));
        while n % 2 == 0 {
            n /= 2;
        }
    }
    let mut candidate = 3u64;
    while n > 1 && candidate.checked_mul(candidate).map_or(false, |sq| sq <= n) {
        if let Some(max) = limit {
            if candidate > max {
                warn!("candidate ceiling {} reached, dropping residual {}", max, n);
                return factors;
            }
        }
        if n % candidate == 0 {
            factors.push(BigInt::from(candidate));
            while n % candidate == 0 {
                n /= candidate;
            }
        }
        candidate += 2;
    }
    if n > 1 {
        factors.push(BigInt::from(n));
    }
    factors
}

fn factor_bigint(n: &BigInt, limit: Option<u64>) -> Vec<BigInt> {
    let mut n = n.clone();
    let mut factors = Vec::new();
    let two = BigInt::from(2);
    if n.is_even() {
        factors.push(two.clone());
        while n.is_even() {
            n /= &two;
        }
    }
    let mut candidate = BigInt::from(3);
    while !n.is_one() && &candidate * &candidate <= n {
        if let Some(max) = limit {
            if candidate > BigInt::from(max) {
                warn!("candidate ceiling {} reached, dropping residual {}", max, n);
                return factors;
            }
        }
        if n.is_multiple_of(&candidate) {
            factors.push(candidate.clone());
            while n.is_multiple_of(&candidate) {
                n /= &candidate;
            }
        }
        candidate += 2;
    }
    if !n.is_one() {
        factors.push(n);
    }
    factors
}
