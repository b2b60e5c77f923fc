// src/lib.rs

pub mod config;
pub mod core;
pub mod engine;
pub mod generator;
pub mod integer_math;
