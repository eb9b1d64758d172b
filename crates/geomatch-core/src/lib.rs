// crates/geomatch-core/src/lib.rs

//! # geomatch-core
//!
//! Resolves free-form postal addresses to a country by fuzzy-matching their
//! tokens against a city→country table and a country-name→code table.
//!
//! ```rust
//! use geomatch_core::{Resolver, NO_MATCH};
//! use serde_json::json;
//!
//! let resolver = Resolver::from_json(
//!     json!({"amsterdam": "NL", "berlin": "DE"}),
//!     json!({"netherlands": "NL", "germany": "DE"}),
//! )?;
//!
//! let hit = resolver.resolve_one("Het Kwadrant 34, Amsterdam", 0)?;
//! assert_eq!((hit.label.as_str(), hit.confidence), ("NL", 100));
//!
//! let miss = resolver.resolve_one("", 0)?;
//! assert_eq!(miss.label, NO_MATCH);
//! # Ok::<(), geomatch_core::GeoMatchError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod api;
pub mod common;
pub mod error;
pub mod evaluate;
pub mod hash;
pub mod loader;
pub mod normalize;
pub mod options;
pub mod resolver;
pub mod score;
pub mod store;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::api::{AddressInput, HashOutput};
pub use crate::common::{TableStats, NO_MATCH};
pub use crate::error::{GeoMatchError, Result, VocabularyKind};
pub use crate::evaluate::{read_labeled_jsonl, Evaluation, LabeledAddress, Mismatch};
pub use crate::loader::load_mapping;
pub use crate::normalize::{normalize, normalize_with, AddressTokens, SplitStrategy};
pub use crate::options::{MatchOptions, DEFAULT_WORKERS};
pub use crate::resolver::{DefaultResolver, MatchResult, Resolver, COUNTRY_PROBE_TOKENS};
pub use crate::score::{JaroWinkler, Ratio, ScorerKind};
pub use crate::store::{Mapping, ReferenceTables};
pub use crate::traits::Scorer;

pub mod prelude {
    pub use crate::{
        normalize, AddressInput, GeoMatchError, HashOutput, MatchOptions, MatchResult,
        ReferenceTables, Resolver, Result, Scorer, ScorerKind, SplitStrategy, NO_MATCH,
    };
}
