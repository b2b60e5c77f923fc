// src/config/mod.rs

pub mod scan_config;

// Re-export main types for convenience
pub use scan_config::{ScanConfig, StrategyKind};
