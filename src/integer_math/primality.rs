// src/integer_math/primality.rs

use num::{BigInt, Integer, One};

const MILLER_RABIN_BASES: [i64; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

/// Miller-Rabin over a fixed deterministic base set; exact for inputs
/// below 3.3 * 10^24, far beyond the pool primes generated here.
pub fn is_probable_prime(n: &BigInt) -> bool {
    let two = BigInt::from(2);
    if n == &two || n == &BigInt::from(3) {
        return true;
    }
    if n < &two || n.is_even() {
        return false;
    }

    let mut d: BigInt = n - 1;
    let mut s = 0u32;
    while d.is_even() {
        d /= 2;
        s += 1;
    }

    'witness: for &base in MILLER_RABIN_BASES.iter() {
        let a = BigInt::from(base);
        if &a >= n {
            continue;
        }
        let mut x = a.modpow(&d, n);
        if x.is_one() || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n - 1 {
                continue 'witness;
            }
            if x.is_one() {
                return false;
            }
        }
        return false;
    }
    true
}

/// Smallest odd probable prime strictly greater than `from`.
pub fn next_prime(from: &BigInt) -> BigInt {
    let mut candidate: BigInt = from + 1;
    if candidate.is_even() {
        candidate += 1;
    }
    while !is_probable_prime(&candidate) {
        candidate += 2;
    }
    candidate
}
