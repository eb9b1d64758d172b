// crates/geomatch-core/src/options.rs

use crate::error::{GeoMatchError, Result};
use crate::loader::common_io::open_stream;
use crate::normalize::SplitStrategy;
use crate::score::ScorerKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Worker threads used by batch resolution unless configured otherwise.
pub const DEFAULT_WORKERS: usize = 4;

/// Resolver configuration.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```rust
/// use geomatch_core::{MatchOptions, ScorerKind};
///
/// let opts: MatchOptions = serde_json::from_str(r#"{"scorer": "jaro-winkler"}"#).unwrap();
/// assert_eq!(opts.scorer, ScorerKind::JaroWinkler);
/// assert_eq!(opts.workers, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Exclusive minimum a best-effort city match must exceed.
    pub threshold: u8,
    /// Size of the batch worker pool. `0` means one thread per core.
    pub workers: usize,
    pub split: SplitStrategy,
    pub scorer: ScorerKind,
    /// Transliterate tokens and keys to ASCII before scoring.
    pub fold_diacritics: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: 0,
            workers: DEFAULT_WORKERS,
            split: SplitStrategy::default(),
            scorer: ScorerKind::default(),
            fold_diacritics: false,
        }
    }
}

impl MatchOptions {
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_split(mut self, split: SplitStrategy) -> Self {
        self.split = split;
        self
    }

    pub fn with_scorer(mut self, scorer: ScorerKind) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_fold_diacritics(mut self, fold: bool) -> Self {
        self.fold_diacritics = fold;
        self
    }

    /// Reads options from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        serde_json::from_reader(reader).map_err(|e| {
            GeoMatchError::MalformedData(format!("{}: invalid options: {}", path.display(), e))
        })
    }
}
