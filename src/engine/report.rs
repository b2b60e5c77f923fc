// src/engine/report.rs

use std::io::{self, Write};

use crate::core::corpus::Corpus;
use crate::engine::combine::CombinedFactors;

pub const ALL_PRIVATE_MESSAGE: &str =
    "every number has at least one unexplained (private) factor";
pub const SOME_EXPLAINED_MESSAGE: &str =
    "at least one number is fully explained by shared factors";

/// Outcome of a scan: one verdict and one combined factor set per
/// corpus element, index-aligned with the corpus.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub verdicts: Vec<bool>,
    pub factors: Vec<CombinedFactors>,
}

impl ScanReport {
    /// The overall judgment of whether the corpus exhibits the
    /// weak-generation property: false means every number still holds a
    /// private factor.
    pub fn any_fully_explained(&self) -> bool {
        self.verdicts.iter().any(|&v| v)
    }

    /// One line per fully-explained number (index, decimal value,
    /// comma-joined factors) and one trailing aggregate line.
    pub fn write_report<W: Write>(&self, corpus: &Corpus, out: &mut W) -> io::Result<()> {
        for (index, verdict) in self.verdicts.iter().enumerate() {
            if *verdict {
                writeln!(
                    out,
                    "{} {} {}",
                    index,
                    corpus.get(index),
                    self.factors[index].join_tokens()
                )?;
            }
        }
        if self.any_fully_explained() {
            writeln!(out, "{}", SOME_EXPLAINED_MESSAGE)
        } else {
            writeln!(out, "{}", ALL_PRIVATE_MESSAGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::BigInt;

    #[test]
    fn all_false_verdicts_report_the_private_property() {
        let corpus = Corpus::new(vec![BigInt::from(97), BigInt::from(101)]);
        let report = ScanReport {
            verdicts: vec![false, false],
            factors: vec![CombinedFactors::default(), CombinedFactors::default()],
        };
        let mut out = Vec::new();
        report.write_report(&corpus, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", ALL_PRIVATE_MESSAGE));
    }

    #[test]
    fn explained_numbers_get_one_line_each() {
        let corpus = Corpus::new(vec![BigInt::from(15), BigInt::from(97)]);
        let mut factors = CombinedFactors::default();
        factors.insert(&BigInt::from(3));
        factors.insert(&BigInt::from(5));
        let report = ScanReport {
            verdicts: vec![true, false],
            factors: vec![factors, CombinedFactors::default()],
        };
        let mut out = Vec::new();
        report.write_report(&corpus, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("0 15 3,5\n{}\n", SOME_EXPLAINED_MESSAGE));
    }
}
