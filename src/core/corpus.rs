// src/core/corpus.rs

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::slice;

use log::warn;
use num::{BigInt, Signed};
use serde::Deserialize;

use crate::core::error::ScanError;

/// What to do when a corpus line fails to parse as a nonnegative decimal
/// integer. There is deliberately no silent-substitution option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLinePolicy {
    /// Abort the run on the first bad line.
    Reject,
    /// Drop the line and log a warning.
    Skip,
}

/// The ordered set of numbers under analysis. Immutable once built and
/// shared by reference with the pairwise workers.
#[derive(Debug, Clone)]
pub struct Corpus {
    numbers: Vec<BigInt>,
}

impl Corpus {
    pub fn new(numbers: Vec<BigInt>) -> Self {
        Corpus { numbers }
    }

    /// Reads up to `max_count` newline-delimited decimal integers; lines
    /// beyond the cap are ignored, blank lines are skipped.
    pub fn from_reader<R: Read>(
        reader: R,
        max_count: usize,
        policy: MalformedLinePolicy,
    ) -> Result<Self, ScanError> {
        let mut numbers = Vec::new();
        for (line_index, line) in BufReader::new(reader).lines().enumerate() {
            if numbers.len() >= max_count {
                break;
            }
            let line = line?;
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            match text.parse::<BigInt>() {
                Ok(n) if !n.is_negative() => numbers.push(n),
                _ => match policy {
                    MalformedLinePolicy::Reject => {
                        return Err(ScanError::MalformedInput {
                            line: line_index + 1,
                            text: text.to_string(),
                        });
                    }
                    MalformedLinePolicy::Skip => {
                        warn!("skipping malformed corpus line {}: {:?}", line_index + 1, text);
                    }
                },
            }
        }
        Ok(Corpus::new(numbers))
    }

    pub fn from_file<P: AsRef<Path>>(
        path: P,
        max_count: usize,
        policy: MalformedLinePolicy,
    ) -> Result<Self, ScanError> {
        Self::from_reader(File::open(path)?, max_count, policy)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn get(&self, index: usize) -> &BigInt {
        &self.numbers[index]
    }

    pub fn as_slice(&self) -> &[BigInt] {
        &self.numbers
    }

    pub fn iter(&self) -> slice::Iter<'_, BigInt> {
        self.numbers.iter()
    }

    pub fn into_numbers(self) -> Vec<BigInt> {
        self.numbers
    }
}
