// src/generator/mod.rs
//
// Test-corpus builders mirroring the generation processes the engine is
// meant to tell apart: uniform random odd integers, weak generation
// with deliberate prime reuse, and sound generation where every number
// keeps a unique private prime.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use num::{BigInt, One};

use crate::core::corpus::{Corpus, MalformedLinePolicy};
use crate::core::error::ScanError;
use crate::core::scan_random::ScanRandom;
use crate::integer_math::primality::next_prime;

/// Uniform random odd integers of at most `bits` bits.
pub fn random_odd_corpus(count: usize, bits: u64, rng: &mut ScanRandom) -> Corpus {
    let numbers = (0..count).map(|_| rng.next_odd_bits(bits)).collect();
    Corpus::new(numbers)
}

/// Pool of distinct probable primes of roughly `bits` bits each.
pub fn random_prime_pool(count: usize, bits: u64, rng: &mut ScanRandom) -> Vec<BigInt> {
    let mut pool = Vec::with_capacity(count);
    while pool.len() < count {
        let prime = next_prime(&rng.next_odd_bits(bits));
        if !pool.contains(&prime) {
            pool.push(prime);
        }
    }
    pool
}

/// Weak generation: the first number is a running product of the pool's
/// leading primes, each of the next numbers deliberately reuses one of
/// those primes, and the rest are products of random pool draws.
pub fn insecure_corpus(pool: &[BigInt], count: usize, bits: u64, rng: &mut ScanRandom) -> Corpus {
    assert!(!pool.is_empty(), "prime pool must not be empty");
    if count == 0 {
        return Corpus::new(Vec::new());
    }
    let mut numbers = Vec::with_capacity(count);

    let mut first = pool[0].clone();
    let mut used = 1;
    while first.bits() < bits && used < pool.len() {
        first = first * &pool[used];
        used += 1;
    }
    numbers.push(first);

    for i in 1..used {
        if numbers.len() >= count {
            break;
        }
        let mut n = pool[i - 1].clone();
        while n.bits() < bits {
            n = n * &pool[rng.next_index(pool.len())];
        }
        numbers.push(n);
    }

    while numbers.len() < count {
        let mut n = BigInt::one();
        while n.bits() < bits {
            n = n * &pool[rng.next_index(pool.len())];
        }
        numbers.push(n);
    }
    Corpus::new(numbers)
}

/// Sound generation: number i pairs the unique prime `pool_a[i]` with
/// random draws from `pool_b`. With pools large relative to the corpus,
/// every number keeps `pool_a[i]` as a private factor.
pub fn secure_corpus(
    pool_a: &[BigInt],
    pool_b: &[BigInt],
    count: usize,
    bits: u64,
    rng: &mut ScanRandom,
) -> Corpus {
    assert!(count <= pool_a.len(), "pool_a must hold one prime per number");
    assert!(!pool_b.is_empty(), "pool_b must not be empty");
    let mut numbers = Vec::with_capacity(count);
    for prime in pool_a.iter().take(count) {
        let mut n = prime.clone();
        while n.bits() < bits {
            n = n * &pool_b[rng.next_index(pool_b.len())];
        }
        numbers.push(n);
    }
    Corpus::new(numbers)
}

/// Newline-delimited decimal prime pool loader.
pub fn load_primes<P: AsRef<Path>>(path: P, max_count: usize) -> Result<Vec<BigInt>, ScanError> {
    let corpus = Corpus::from_file(path, max_count, MalformedLinePolicy::Reject)?;
    Ok(corpus.into_numbers())
}

/// Writes a corpus in the newline-delimited decimal exchange format.
pub fn write_corpus<P: AsRef<Path>>(path: P, corpus: &Corpus) -> Result<(), ScanError> {
    let mut out = BufWriter::new(File::create(&path)?);
    for n in corpus.iter() {
        writeln!(out, "{}", n)?;
    }
    out.flush()?;
    info!("wrote {} numbers to {}", corpus.len(), path.as_ref().display());
    Ok(())
}
