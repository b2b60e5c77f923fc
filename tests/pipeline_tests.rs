// tests/pipeline_tests.rs
//
// End-to-end tests for the shared-factor discovery pipeline: corpus in,
// verdicts out, across every strategy.

use num::BigInt;

use batchgcd::core::corpus::Corpus;
use batchgcd::core::scan_random::ScanRandom;
use batchgcd::engine::factorize::FactorOptions;
use batchgcd::engine::report::{ALL_PRIVATE_MESSAGE, SOME_EXPLAINED_MESSAGE};
use batchgcd::engine::{run_scan, ScanOptions, Strategy};
use batchgcd::generator;

const ALL_STRATEGIES: [Strategy; 3] = [
    Strategy::PairwiseSingleThreaded,
    Strategy::PairwiseMultiThreaded(4),
    Strategy::BatchProductTrick,
];

fn corpus_of(values: &[u64]) -> Corpus {
    Corpus::new(values.iter().map(|&v| BigInt::from(v)).collect())
}

fn options(strategy: Strategy) -> ScanOptions {
    ScanOptions { strategy, factoring: FactorOptions::default() }
}

fn sorted_factors(report: &batchgcd::engine::report::ScanReport, index: usize) -> Vec<BigInt> {
    let mut factors: Vec<BigInt> = report.factors[index].iter().cloned().collect();
    factors.sort();
    factors
}

#[test]
fn shared_factors_fully_explain_15_21_35() {
    let corpus = corpus_of(&[15, 21, 35]);
    for strategy in ALL_STRATEGIES {
        let report = run_scan(&corpus, &options(strategy)).unwrap();
        assert_eq!(report.verdicts, vec![true, true, true], "strategy {:?}", strategy);
        assert!(report.any_fully_explained());
        assert_eq!(sorted_factors(&report, 0), vec![BigInt::from(3), BigInt::from(5)]);
        assert_eq!(sorted_factors(&report, 1), vec![BigInt::from(3), BigInt::from(7)]);
        assert_eq!(sorted_factors(&report, 2), vec![BigInt::from(5), BigInt::from(7)]);
    }
}

#[test]
fn coprime_corpus_retains_private_factors() {
    let corpus = corpus_of(&[97, 101]);
    for strategy in ALL_STRATEGIES {
        let report = run_scan(&corpus, &options(strategy)).unwrap();
        assert_eq!(report.verdicts, vec![false, false], "strategy {:?}", strategy);
        assert!(report.factors.iter().all(|f| f.is_empty()));
        assert!(!report.any_fully_explained());
    }
}

#[test]
fn report_text_matches_the_contract() {
    let corpus = corpus_of(&[15, 21, 35]);
    for strategy in ALL_STRATEGIES {
        let report = run_scan(&corpus, &options(strategy)).unwrap();
        let mut out = Vec::new();
        report.write_report(&corpus, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            format!("0 15 3,5\n1 21 3,7\n2 35 5,7\n{}\n", SOME_EXPLAINED_MESSAGE),
            "strategy {:?}",
            strategy
        );
    }

    let coprime = corpus_of(&[97, 101]);
    let report = run_scan(&coprime, &options(Strategy::BatchProductTrick)).unwrap();
    let mut out = Vec::new();
    report.write_report(&coprime, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", ALL_PRIVATE_MESSAGE));
}

#[test]
fn constructed_pool_corpus_round_trips() {
    // every prime from the pool appears in at least two elements, so
    // every number is fully explained and the combined sets are exactly
    // the construction primes
    let corpus = corpus_of(&[3 * 5 * 7, 3 * 11 * 13, 5 * 11, 7 * 13]);
    let expected: [&[u64]; 4] = [&[3, 5, 7], &[3, 11, 13], &[5, 11], &[7, 13]];
    for strategy in ALL_STRATEGIES {
        let report = run_scan(&corpus, &options(strategy)).unwrap();
        assert_eq!(report.verdicts, vec![true; 4], "strategy {:?}", strategy);
        for (index, primes) in expected.iter().enumerate() {
            let want: Vec<BigInt> = primes.iter().map(|&p| BigInt::from(p)).collect();
            assert_eq!(sorted_factors(&report, index), want, "index {}", index);
        }
    }
}

#[test]
fn strategies_agree_on_a_generated_weak_corpus() {
    let mut rng = ScanRandom::from_seed(7);
    let pool = generator::random_prime_pool(24, 16, &mut rng);
    let corpus = generator::insecure_corpus(&pool, 12, 64, &mut rng);

    let batch = run_scan(&corpus, &options(Strategy::BatchProductTrick)).unwrap();
    let pairwise = run_scan(&corpus, &options(Strategy::PairwiseSingleThreaded)).unwrap();
    let threaded = run_scan(&corpus, &options(Strategy::PairwiseMultiThreaded(8))).unwrap();

    assert_eq!(batch.verdicts, pairwise.verdicts);
    assert_eq!(pairwise.verdicts, threaded.verdicts);
    // combined sets match as sets; discovery order may differ per path
    for index in 0..corpus.len() {
        assert_eq!(sorted_factors(&batch, index), sorted_factors(&pairwise, index));
        assert_eq!(sorted_factors(&pairwise, index), sorted_factors(&threaded, index));
    }

    // prime reuse is planted by construction, so something must surface
    assert!(!batch.factors[0].is_empty());
}

#[test]
fn secure_corpus_keeps_every_number_private() {
    let mut rng = ScanRandom::from_seed(11);
    let pool_a = generator::random_prime_pool(6, 20, &mut rng);
    // keep the shared pool disjoint from the private primes
    let pool_b: Vec<BigInt> = generator::random_prime_pool(40, 16, &mut rng)
        .into_iter()
        .filter(|p| !pool_a.contains(p))
        .collect();
    let corpus = generator::secure_corpus(&pool_a, &pool_b, 6, 80, &mut rng);

    for strategy in ALL_STRATEGIES {
        let report = run_scan(&corpus, &options(strategy)).unwrap();
        // every number keeps its unique pool_a prime unexplained
        assert!(!report.any_fully_explained(), "strategy {:?}", strategy);
    }
}

#[test]
fn degenerate_corpora_are_handled() {
    for strategy in ALL_STRATEGIES {
        let empty = run_scan(&corpus_of(&[]), &options(strategy)).unwrap();
        assert!(empty.verdicts.is_empty());
        assert!(!empty.any_fully_explained());

        let single = run_scan(&corpus_of(&[15]), &options(strategy)).unwrap();
        assert_eq!(single.verdicts, vec![false]);
        assert!(single.factors[0].is_empty());
    }
}
