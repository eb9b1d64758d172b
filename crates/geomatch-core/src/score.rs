// crates/geomatch-core/src/score.rs

//! Concrete [`Scorer`]s backed by `rapidfuzz`.

use crate::traits::Scorer;
use rapidfuzz::distance::jaro_winkler;
use rapidfuzz::fuzz;
use serde::{Deserialize, Serialize};

/// Indel-normalized ratio, `1 - indel_distance / (len_a + len_b)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ratio;

impl Scorer for Ratio {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        fuzz::ratio(a.chars(), b.chars())
    }
}

/// Jaro-Winkler similarity, favouring shared prefixes.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinkler;

impl Scorer for JaroWinkler {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro_winkler::similarity(a.chars(), b.chars())
    }
}

/// Runtime selection of a built-in scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScorerKind {
    #[default]
    Ratio,
    JaroWinkler,
}

impl Scorer for ScorerKind {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        match self {
            ScorerKind::Ratio => Ratio.similarity(a, b),
            ScorerKind::JaroWinkler => JaroWinkler.similarity(a, b),
        }
    }
}

/// Scales a `[0, 1]` similarity of two *different* strings to `0..=99`.
///
/// Rounds half to even. A near-identical pair that would round up to 100 is
/// capped at 99; 100 is reserved for equal strings.
pub(crate) fn to_confidence(similarity: f64) -> u8 {
    let scaled = (similarity * 100.0).round_ties_even().clamp(0.0, 100.0) as u8;
    scaled.min(99)
}
