// crates/geomatch-core/src/evaluate.rs

//! Accuracy measurement against addresses with known countries.

use crate::error::{GeoMatchError, Result};
use crate::loader::common_io::open_stream;
use crate::resolver::{MatchResult, Resolver};
use crate::traits::Scorer;
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// One line of a JSON Lines evaluation file:
/// `{"address": "Het Kwadrant 34, Amsterdam", "country": "NL"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledAddress {
    pub address: String,
    pub country: String,
}

/// Reads labelled addresses; blank lines are skipped.
pub fn read_labeled_jsonl(path: impl AsRef<Path>) -> Result<Vec<LabeledAddress>> {
    let path = path.as_ref();
    let reader = BufReader::new(open_stream(path)?);

    let mut out = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|e| {
            GeoMatchError::MalformedData(format!("{}:{}: {}", path.display(), i + 1, e))
        })?;
        out.push(record);
    }
    Ok(out)
}

/// A record whose resolved label differed from its `country`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Position in the evaluated records.
    pub index: usize,
    pub result: MatchResult,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub total: usize,
    pub correct: usize,
    pub mismatches: Vec<Mismatch>,
}

impl Evaluation {
    /// Fraction of correct records; 0 for an empty set.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

impl<S: Scorer> Resolver<S> {
    pub fn evaluate(&self, records: &[LabeledAddress], threshold: u8) -> Result<Evaluation> {
        let addresses: Vec<&str> = records.iter().map(|r| r.address.as_str()).collect();
        let results = self.resolve_many(&addresses[..], threshold)?;

        let mismatches: Vec<Mismatch> = results
            .into_iter()
            .zip(records)
            .enumerate()
            .filter(|(_, (result, record))| result.label != record.country)
            .map(|(index, (result, _))| Mismatch { index, result })
            .collect();

        let evaluation = Evaluation {
            total: records.len(),
            correct: records.len() - mismatches.len(),
            mismatches,
        };
        info!(
            total = evaluation.total,
            correct = evaluation.correct,
            accuracy = evaluation.accuracy(),
            "evaluation finished"
        );
        Ok(evaluation)
    }
}
