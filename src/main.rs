// src/main.rs

use std::env;
use std::io;
use std::process::ExitCode;

use env_logger::Env;
use log::{error, info};

use batchgcd::config::ScanConfig;
use batchgcd::core::corpus::Corpus;
use batchgcd::core::error::ScanError;
use batchgcd::core::scan_random::ScanRandom;
use batchgcd::engine::run_scan;
use batchgcd::generator;

fn main() -> ExitCode {
    let config = match ScanConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize the logger
    let env = Env::default()
        .filter_or("BATCHGCD_LOG_LEVEL", config.log_level.as_str())
        .write_style_or("BATCHGCD_LOG_STYLE", "always");
    env_logger::Builder::from_env(env).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: {} <scan|gen-random|gen-insecure|gen-secure> <file>", args[0]);
        return ExitCode::FAILURE;
    }

    let result = match args[1].as_str() {
        "scan" => scan(&config, &args[2]),
        "gen-random" => gen_random(&config, &args[2]),
        "gen-insecure" => gen_insecure(&config, &args[2]),
        "gen-secure" => gen_secure(&config, &args[2]),
        other => {
            eprintln!("unknown command: {}", other);
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn scan(config: &ScanConfig, path: &str) -> Result<(), ScanError> {
    let corpus = Corpus::from_file(path, config.max_numbers, config.on_malformed)?;
    info!("loaded {} numbers from {}", corpus.len(), path);
    let report = run_scan(&corpus, &config.scan_options())?;
    let stdout = io::stdout();
    report.write_report(&corpus, &mut stdout.lock())?;
    Ok(())
}

fn rng_for(config: &ScanConfig) -> ScanRandom {
    match config.seed {
        Some(seed) => ScanRandom::from_seed(seed),
        None => ScanRandom::new(),
    }
}

fn gen_random(config: &ScanConfig, path: &str) -> Result<(), ScanError> {
    let mut rng = rng_for(config);
    let corpus = generator::random_odd_corpus(config.max_numbers, config.bits, &mut rng);
    generator::write_corpus(path, &corpus)
}

fn gen_insecure(config: &ScanConfig, path: &str) -> Result<(), ScanError> {
    let mut rng = rng_for(config);
    let pool = generator::random_prime_pool(config.pool_size, config.pool_prime_bits, &mut rng);
    let corpus = generator::insecure_corpus(&pool, config.max_numbers, config.bits, &mut rng);
    generator::write_corpus(path, &corpus)
}

fn gen_secure(config: &ScanConfig, path: &str) -> Result<(), ScanError> {
    let mut rng = rng_for(config);
    let pool_a = generator::random_prime_pool(config.max_numbers, config.pool_prime_bits, &mut rng);
    let pool_b = generator::random_prime_pool(config.pool_size, config.pool_prime_bits, &mut rng);
    let corpus = generator::secure_corpus(&pool_a, &pool_b, config.max_numbers, config.bits, &mut rng);
    generator::write_corpus(path, &corpus)
}
