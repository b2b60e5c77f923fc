// src/engine/mod.rs
//
// Shared-factor discovery engine: one pipeline parameterized by a GCD
// strategy instead of parallel near-identical programs.
//
// Strategy            Cost                  Use
// ────────────────────────────────────────────────────────────────
// BatchProductTrick   O(N) bigint ops       default discovery path
// Pairwise*           O(N^2) GCDs           verification, attributes
//                                           factors to specific pairs
//
// Data flow: corpus → raw GCDs → trial-division factor lists →
// per-index combined sets → reconstruction verdicts → report.

pub mod batch_gcd;
pub mod combine;
pub mod factorize;
pub mod pairwise;
pub mod report;
pub mod verify;

use log::info;
use num::One;

use crate::core::corpus::Corpus;
use crate::core::error::ScanError;

use self::combine::FactorAccumulator;
use self::factorize::{distinct_prime_factors, FactorOptions};
use self::report::ScanReport;

/// How raw GCDs are obtained from the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Full pairwise sweep on the calling thread.
    PairwiseSingleThreaded,
    /// Pairwise sweep strided across a fixed pool of workers.
    PairwiseMultiThreaded(usize),
    /// Batch-GCD product trick, linear in corpus size.
    BatchProductTrick,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::PairwiseSingleThreaded => "pairwise",
            Strategy::PairwiseMultiThreaded(_) => "pairwise-threaded",
            Strategy::BatchProductTrick => "batch",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub strategy: Strategy,
    pub factoring: FactorOptions,
}

/// Runs the full pipeline over the corpus and returns the per-number
/// verdicts with their combined factor sets.
pub fn run_scan(corpus: &Corpus, options: &ScanOptions) -> Result<ScanReport, ScanError> {
    info!(
        "scanning {} numbers with the {} strategy",
        corpus.len(),
        options.strategy.name()
    );
    let mut accumulator = FactorAccumulator::new(corpus.len());

    match options.strategy {
        Strategy::BatchProductTrick => {
            let gcds = batch_gcd::shared_factor_gcds(corpus)?;
            for (i, g) in gcds.iter().enumerate() {
                if g.is_one() {
                    continue;
                }
                let factors = distinct_prime_factors(g, &options.factoring);
                accumulator.record(i, &factors);
            }
        }
        Strategy::PairwiseSingleThreaded | Strategy::PairwiseMultiThreaded(_) => {
            let workers = match options.strategy {
                Strategy::PairwiseMultiThreaded(w) => w.max(1),
                _ => 1,
            };
            let matrix = pairwise::PairwiseGcdMatrix::compute(corpus, workers)?;
            // canonical pair order keeps the combined sets deterministic
            for i in 0..corpus.len() {
                for j in (i + 1)..corpus.len() {
                    if let Some(g) = matrix.get(i, j) {
                        if g.is_one() {
                            continue;
                        }
                        let factors = distinct_prime_factors(g, &options.factoring);
                        accumulator.record(i, &factors);
                        accumulator.record(j, &factors);
                    }
                }
            }
        }
    }

    let factors = accumulator.into_sets();
    let verdicts = corpus
        .iter()
        .zip(factors.iter())
        .map(|(n, set)| verify::fully_explained(n, set))
        .collect();
    Ok(ScanReport { verdicts, factors })
}
