// src/core/scan_random.rs

use num::bigint::Sign;
use num::BigInt;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8-backed randomness for corpus generation. Seedable so that
/// generated corpora are reproducible in tests.
pub struct ScanRandom {
    rng: ChaCha8Rng,
}

impl ScanRandom {
    /// OS-seeded instance for ordinary runs.
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill_bytes(&mut seed);
        ScanRandom { rng: ChaCha8Rng::from_seed(seed) }
    }

    /// Deterministic instance for reproducible corpora.
    pub fn from_seed(seed: u64) -> Self {
        ScanRandom { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform index in `[0, bound)`.
    pub fn next_index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");
        (self.rng.next_u64() % bound as u64) as usize
    }

    /// Random odd integer of at most `bits` bits (top bits random, low
    /// bit forced set).
    pub fn next_odd_bits(&mut self, bits: u64) -> BigInt {
        assert!(bits >= 2, "need at least 2 bits");
        let nbytes = ((bits + 7) / 8) as usize;
        let mut buf = vec![0u8; nbytes];
        self.rng.fill_bytes(&mut buf);
        let mut n = BigInt::from_bytes_be(Sign::Plus, &buf);
        n >>= nbytes as u64 * 8 - bits;
        n.set_bit(0, true);
        n
    }
}

impl Default for ScanRandom {
    fn default() -> Self {
        Self::new()
    }
}
