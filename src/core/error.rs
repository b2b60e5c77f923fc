// src/core/error.rs

use std::error::Error;
use std::fmt;
use std::io;

/// Pipeline phase carried in diagnostics so a failed run names what it
/// was doing and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    CorpusLoad,
    ProductPass,
    ExactDivision,
    Gcd,
    Factorization,
    Verification,
}

impl fmt::Display for ScanPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScanPhase::CorpusLoad => "corpus load",
            ScanPhase::ProductPass => "product pass",
            ScanPhase::ExactDivision => "exact division",
            ScanPhase::Gcd => "gcd",
            ScanPhase::Factorization => "factorization",
            ScanPhase::Verification => "verification",
        };
        f.write_str(name)
    }
}

/// Crate-level error taxonomy. Arithmetic invariant violations are logic
/// or data-corruption bugs, never retried; a worker failure aborts the
/// whole pairwise phase and no partial matrix is used downstream.
#[derive(Debug)]
pub enum ScanError {
    /// A container for the requested element count could not be sized.
    Allocation { phase: ScanPhase, requested: usize },
    /// A corpus line failed to parse as a nonnegative decimal integer.
    MalformedInput { line: usize, text: String },
    /// An assumed arithmetic invariant did not hold, e.g. a nonzero
    /// remainder where division was exact by construction.
    ArithmeticInvariant {
        phase: ScanPhase,
        index: usize,
        detail: String,
    },
    /// A pairwise worker failed; partial results are discarded.
    Worker { worker: usize, source: Box<ScanError> },
    /// The fixed-size worker pool could not be built.
    ThreadPool(rayon::ThreadPoolBuildError),
    Config(config::ConfigError),
    Io(io::Error),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Allocation { phase, requested } => {
                write!(f, "allocation failure in {} phase ({} elements)", phase, requested)
            }
            ScanError::MalformedInput { line, text } => {
                write!(f, "malformed corpus line {}: {:?}", line, text)
            }
            ScanError::ArithmeticInvariant { phase, index, detail } => {
                write!(f, "arithmetic invariant violated in {} phase at index {}: {}", phase, index, detail)
            }
            ScanError::Worker { worker, source } => {
                write!(f, "worker {} failed: {}", worker, source)
            }
            ScanError::ThreadPool(e) => write!(f, "worker pool construction failed: {}", e),
            ScanError::Config(e) => write!(f, "configuration error: {}", e),
            ScanError::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl Error for ScanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScanError::Worker { source, .. } => Some(source.as_ref()),
            ScanError::ThreadPool(e) => Some(e),
            ScanError::Config(e) => Some(e),
            ScanError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for ScanError {
    fn from(e: config::ConfigError) -> Self {
        ScanError::Config(e)
    }
}

impl From<io::Error> for ScanError {
    fn from(e: io::Error) -> Self {
        ScanError::Io(e)
    }
}

impl From<rayon::ThreadPoolBuildError> for ScanError {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        ScanError::ThreadPool(e)
    }
}
