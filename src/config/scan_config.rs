// src/config/scan_config.rs

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::corpus::MalformedLinePolicy;
use crate::engine::factorize::{FactorMode, FactorOptions};
use crate::engine::{ScanOptions, Strategy};

/// GCD strategy selector as it appears in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    Batch,
    Pairwise,
    PairwiseThreaded,
}

/// Scan configuration with precedence: defaults → batchgcd.toml →
/// BATCHGCD_* environment overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// GCD strategy: "batch", "pairwise", or "pairwise-threaded".
    pub strategy: StrategyKind,

    /// Worker count for the threaded pairwise strategy (default: all cores).
    pub threads: Option<usize>,

    /// Upper bound on corpus lines read, and the size of generated corpora.
    pub max_numbers: usize,

    /// Bit length of generated corpus numbers.
    pub bits: u64,

    /// Size of generated prime pools.
    pub pool_size: usize,

    /// Bit length of generated pool primes.
    pub pool_prime_bits: u64,

    /// RNG seed for reproducible generation.
    pub seed: Option<u64>,

    /// Factor GCDs at full width, or word-capped legacy width.
    pub factor_mode: FactorMode,

    /// Trial-division candidate ceiling.
    pub candidate_limit: Option<u64>,

    /// Malformed corpus line handling: "reject" or "skip".
    pub on_malformed: MalformedLinePolicy,

    /// Logging level (error, warn, info, debug, trace).
    pub log_level: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            strategy: StrategyKind::Batch,
            threads: None,
            max_numbers: 10_000,
            bits: 256,
            pool_size: 1_000,
            pool_prime_bits: 24,
            seed: None,
            factor_mode: FactorMode::BigInt,
            candidate_limit: None,
            on_malformed: MalformedLinePolicy::Reject,
            log_level: "info".to_string(),
        }
    }
}

impl ScanConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(Path::new("batchgcd.toml"))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::build(path.as_ref())
    }

    fn build(path: &Path) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("strategy", "batch")?
            .set_default("max_numbers", 10_000i64)?
            .set_default("bits", 256i64)?
            .set_default("pool_size", 1_000i64)?
            .set_default("pool_prime_bits", 24i64)?
            .set_default("factor_mode", "big-int")?
            .set_default("on_malformed", "reject")?
            .set_default("log_level", "info")?;

        if path.exists() {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(Environment::with_prefix("BATCHGCD").try_parsing(true));

        builder.build()?.try_deserialize()
    }

    /// Worker count for the threaded pairwise strategy.
    pub fn worker_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            strategy: match self.strategy {
                StrategyKind::Batch => Strategy::BatchProductTrick,
                StrategyKind::Pairwise => Strategy::PairwiseSingleThreaded,
                StrategyKind::PairwiseThreaded => {
                    Strategy::PairwiseMultiThreaded(self.worker_count())
                }
            },
            factoring: FactorOptions {
                mode: self.factor_mode,
                candidate_limit: self.candidate_limit,
            },
        }
    }
}
