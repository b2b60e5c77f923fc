// src/core/mod.rs

pub mod corpus;
pub mod error;
pub mod scan_random;
