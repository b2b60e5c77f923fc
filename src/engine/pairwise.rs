// src/engine/pairwise.rs
//
// Pairwise GCD sweep, the O(N^2) verification path. Rows are strided
// across a fixed pool of W workers; worker t owns rows t, t+W, t+2W, ...
// and each worker fills a private output slot, so the cell sets written
// are disjoint and no locking is needed. The coordinator merges slots
// only after the scope's join barrier. Load imbalance across strides is
// accepted: GCD cost is dominated by operand bit length, not row index.

use std::collections::HashMap;

use log::{info, trace};
use num::{BigInt, Integer, Zero};

use crate::core::corpus::Corpus;
use crate::core::error::{ScanError, ScanPhase};

type Cell = ((usize, usize), BigInt);

/// Sparse upper-triangular GCD matrix keyed by canonical (i, j), i < j.
/// An absent cell means "not computed", which is distinct from a stored
/// GCD of 1 ("computed, no shared factor"). The diagonal is never
/// computed or stored.
#[derive(Debug)]
pub struct PairwiseGcdMatrix {
    len: usize,
    cells: HashMap<(usize, usize), BigInt>,
}

impl PairwiseGcdMatrix {
    /// Length of the corpus this matrix was computed from.
    pub fn corpus_len(&self) -> usize {
        self.len
    }

    /// Canonicalized lookup; `None` for the diagonal and for cells that
    /// were never computed.
    pub fn get(&self, i: usize, j: usize) -> Option<&BigInt> {
        if i == j {
            return None;
        }
        let key = if i < j { (i, j) } else { (j, i) };
        self.cells.get(&key)
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Computes gcd(numbers[i], numbers[j]) for every canonical pair,
    /// using `workers` threads when more than one is requested.
    pub fn compute(corpus: &Corpus, workers: usize) -> Result<Self, ScanError> {
        let n = corpus.len();
        let cell_count = n
            .checked_mul(n.saturating_sub(1))
            .map(|c| c / 2)
            .ok_or(ScanError::Allocation { phase: ScanPhase::Gcd, requested: n })?;
        let mut cells = HashMap::new();
        cells
            .try_reserve(cell_count)
            .map_err(|_| ScanError::Allocation { phase: ScanPhase::Gcd, requested: cell_count })?;

        if workers <= 1 {
            info!("pairwise gcd over {} numbers, single-threaded", n);
            cells.extend(row_cells(corpus, 0..n)?);
            return Ok(PairwiseGcdMatrix { len: n, cells });
        }

        info!("pairwise gcd over {} numbers across {} workers", n, workers);
        let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;

        let mut slots: Vec<Result<Vec<Cell>, ScanError>> =
            (0..workers).map(|_| Ok(Vec::new())).collect();

        pool.scope(|scope| {
            for (t, slot) in slots.iter_mut().enumerate() {
                scope.spawn(move |_| {
                    *slot = row_cells(corpus, (t..n).step_by(workers));
                });
            }
        });
        // every slot is final once the scope returns; merge or fail fast
        for (t, slot) in slots.into_iter().enumerate() {
            match slot {
                Ok(rows) => cells.extend(rows),
                Err(source) => {
                    return Err(ScanError::Worker { worker: t, source: Box::new(source) });
                }
            }
        }
        Ok(PairwiseGcdMatrix { len: n, cells })
    }

    /// Computes only the rows in `rows` (all columns j > i for each);
    /// everything else stays absent. This is the caller-supplied subset
    /// form of the sweep.
    pub fn compute_rows<I>(corpus: &Corpus, rows: I) -> Result<Self, ScanError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut cells = HashMap::new();
        cells.extend(row_cells(corpus, rows)?);
        Ok(PairwiseGcdMatrix { len: corpus.len(), cells })
    }
}

/// All cells of the given rows. A zero operand is a data invariant
/// violation and aborts the sweep.
fn row_cells<I>(corpus: &Corpus, rows: I) -> Result<Vec<Cell>, ScanError>
where
    I: IntoIterator<Item = usize>,
{
    let numbers = corpus.as_slice();
    let mut out = Vec::new();
    for i in rows {
        if numbers[i].is_zero() {
            return Err(ScanError::ArithmeticInvariant {
                phase: ScanPhase::Gcd,
                index: i,
                detail: "corpus element is zero".to_string(),
            });
        }
        for j in (i + 1)..numbers.len() {
            if numbers[j].is_zero() {
                return Err(ScanError::ArithmeticInvariant {
                    phase: ScanPhase::Gcd,
                    index: j,
                    detail: "corpus element is zero".to_string(),
                });
            }
            let g = numbers[i].gcd(&numbers[j]);
            trace!("gcd({}, {}) = {}", i, j, g);
            out.push(((i, j), g));
        }
    }
    Ok(out)
}
