// crates/geomatch-core/src/resolver.rs

//! # Resolver
//!
//! Scores address tokens against the country and city vocabularies.
//!
//! 1. Country fast path: the first [`COUNTRY_PROBE_TOKENS`] tokens are scored
//!    against the country names. A perfect score wins outright.
//! 2. City sweep: every token is scored against the city names. A perfect
//!    score stops the sweep, otherwise the best score seen is kept.
//! 3. The best city is accepted only if its score exceeds the threshold.

use crate::common::NO_MATCH;
use crate::error::{GeoMatchError, Result, VocabularyKind};
use crate::normalize::{normalize_with, AddressTokens};
use crate::options::MatchOptions;
use crate::score::ScorerKind;
use crate::store::{Mapping, ReferenceTables};
use crate::text::scoring_form_with;
use crate::traits::Scorer;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, trace};

/// How many leading tokens are checked against country names.
///
/// Country names are assumed to be written last, so only the first
/// (most specific) token is probed.
pub const COUNTRY_PROBE_TOKENS: usize = 1;

const PERFECT: u8 = 100;

/// Outcome of resolving one address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchResult {
    /// Country identifier, country code, or [`NO_MATCH`].
    pub label: String,
    /// Similarity of the best match, 0..=100.
    pub confidence: u8,
}

impl MatchResult {
    pub fn new(label: impl Into<String>, confidence: u8) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }

    pub fn no_match(confidence: u8) -> Self {
        Self::new(NO_MATCH, confidence)
    }

    pub fn is_match(&self) -> bool {
        self.label != NO_MATCH
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Hit {
    index: usize,
    score: u8,
}

/// Table keys in scoring form, computed once per resolver.
#[derive(Debug)]
struct Vocabulary {
    kind: VocabularyKind,
    forms: Vec<String>,
}

impl Vocabulary {
    fn build(kind: VocabularyKind, mapping: &Mapping, fold: bool) -> Self {
        Self {
            kind,
            forms: mapping.keys().map(|k| scoring_form_with(k, fold)).collect(),
        }
    }

    /// Best-scoring key for `form`. Only strictly greater scores replace the
    /// running best, so the earliest key wins ties. `None` if nothing scored
    /// above zero.
    fn best_match<S: Scorer>(&self, form: &str, scorer: &S) -> Result<Option<Hit>> {
        if self.forms.is_empty() {
            return Err(GeoMatchError::NoVocabulary(self.kind));
        }

        let mut best: Option<Hit> = None;
        for (index, key) in self.forms.iter().enumerate() {
            let score = scorer.score(form, key);
            if score > best.map_or(0, |b| b.score) {
                best = Some(Hit { index, score });
                if score == PERFECT {
                    break;
                }
            }
        }
        Ok(best)
    }
}

/// Matches addresses against a shared set of [`ReferenceTables`].
///
/// Holds no mutable state; one resolver can serve any number of threads.
#[derive(Debug)]
pub struct Resolver<S: Scorer = ScorerKind> {
    tables: Arc<ReferenceTables>,
    cities: Vocabulary,
    countries: Vocabulary,
    scorer: S,
    options: MatchOptions,
    pool: rayon::ThreadPool,
}

pub type DefaultResolver = Resolver<ScorerKind>;

impl Resolver<ScorerKind> {
    /// Resolver with default [`MatchOptions`].
    pub fn new(tables: impl Into<Arc<ReferenceTables>>) -> Result<Self> {
        Self::with_options(tables, MatchOptions::default())
    }

    /// Resolver using the scorer named in `options`.
    pub fn with_options(
        tables: impl Into<Arc<ReferenceTables>>,
        options: MatchOptions,
    ) -> Result<Self> {
        let scorer = options.scorer;
        Self::with_scorer(tables, scorer, options)
    }

    /// Builds the tables from two JSON documents, see [`ReferenceTables::from_json`].
    pub fn from_json(
        city_to_country: serde_json::Value,
        country_name_to_code: serde_json::Value,
    ) -> Result<Self> {
        Self::new(ReferenceTables::from_json(city_to_country, country_name_to_code)?)
    }

    /// Loads both tables from disk.
    pub fn from_paths(
        city_path: impl AsRef<Path>,
        country_path: impl AsRef<Path>,
        options: MatchOptions,
    ) -> Result<Self> {
        Self::with_options(ReferenceTables::load(city_path, country_path)?, options)
    }

    /// Resolver over the bundled dataset (loaded once per process).
    pub fn load_default(options: MatchOptions) -> Result<Self> {
        Self::with_options(ReferenceTables::load_default()?, options)
    }
}

impl<S: Scorer> Resolver<S> {
    /// Resolver with a caller-provided scorer. `options.scorer` is ignored.
    pub fn with_scorer(
        tables: impl Into<Arc<ReferenceTables>>,
        scorer: S,
        options: MatchOptions,
    ) -> Result<Self> {
        let tables = tables.into();
        let fold = options.fold_diacritics;
        let cities = Vocabulary::build(VocabularyKind::Cities, tables.city_to_country(), fold);
        let countries = Vocabulary::build(
            VocabularyKind::Countries,
            tables.country_name_to_code(),
            fold,
        );
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.workers)
            .thread_name(|i| format!("geomatch-{i}"))
            .build()?;

        debug!(
            cities = cities.forms.len(),
            countries = countries.forms.len(),
            workers = pool.current_num_threads(),
            "resolver ready"
        );

        Ok(Self {
            tables,
            cities,
            countries,
            scorer,
            options,
            pool,
        })
    }

    pub fn tables(&self) -> &Arc<ReferenceTables> {
        &self.tables
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Tokenizes with the configured [`SplitStrategy`](crate::SplitStrategy).
    pub fn tokenize(&self, address: &str) -> AddressTokens {
        normalize_with(address, self.options.split)
    }

    /// Resolves already-normalized tokens.
    ///
    /// Fails with [`GeoMatchError::EmptyInput`] for an empty sequence and
    /// with [`GeoMatchError::NoVocabulary`] if a table has no keys.
    pub fn resolve_tokens(&self, tokens: &AddressTokens, threshold: u8) -> Result<MatchResult> {
        if tokens.is_empty() {
            return Err(GeoMatchError::EmptyInput);
        }

        let fold = self.options.fold_diacritics;
        let forms: Vec<String> = tokens.iter().map(|t| scoring_form_with(t, fold)).collect();

        for form in forms.iter().take(COUNTRY_PROBE_TOKENS) {
            if let Some(hit) = self.countries.best_match(form, &self.scorer)? {
                if hit.score == PERFECT {
                    let code = self.tables.country_name_to_code().value_at(hit.index);
                    trace!(token = %form, code, "exact country name");
                    return Ok(MatchResult::new(code, PERFECT));
                }
            }
        }

        let cities = self.tables.city_to_country();
        let mut best: Option<Hit> = None;
        for form in &forms {
            let Some(hit) = self.cities.best_match(form, &self.scorer)? else {
                trace!(token = %form, "no city overlap");
                continue;
            };
            trace!(token = %form, city = cities.key_at(hit.index), score = hit.score, "best city");

            if hit.score == PERFECT {
                return Ok(MatchResult::new(cities.value_at(hit.index), PERFECT));
            }
            if hit.score > best.map_or(0, |b| b.score) {
                best = Some(hit);
            }
        }

        Ok(match best {
            Some(hit) if hit.score > threshold => {
                MatchResult::new(cities.value_at(hit.index), hit.score)
            }
            Some(hit) => MatchResult::no_match(hit.score),
            None => MatchResult::no_match(0),
        })
    }

    /// Resolves one raw address.
    ///
    /// An address with no tokens yields `("No match", 0)`; only a
    /// misconfigured table is an error.
    pub fn resolve_one(&self, address: &str, threshold: u8) -> Result<MatchResult> {
        match self.resolve_tokens(&self.tokenize(address), threshold) {
            Err(GeoMatchError::EmptyInput) => Ok(MatchResult::no_match(0)),
            other => other,
        }
    }

    /// Resolves a batch on the resolver's worker pool.
    ///
    /// Output position `i` always belongs to input `i`.
    pub fn resolve_many<A>(&self, addresses: &[A], threshold: u8) -> Result<Vec<MatchResult>>
    where
        A: AsRef<str> + Sync,
    {
        let results: Result<Vec<MatchResult>> = self.pool.install(|| {
            addresses
                .par_iter()
                .map(|address| self.resolve_one(address.as_ref(), threshold))
                .collect()
        });
        if let Ok(results) = &results {
            debug!(
                addresses = results.len(),
                matched = results.iter().filter(|r| r.is_match()).count(),
                "batch resolved"
            );
        }
        results
    }

    /// Single-threaded [`Resolver::resolve_many`].
    pub fn resolve_many_sequential<A: AsRef<str>>(
        &self,
        addresses: &[A],
        threshold: u8,
    ) -> Result<Vec<MatchResult>> {
        addresses
            .iter()
            .map(|address| self.resolve_one(address.as_ref(), threshold))
            .collect()
    }
}
