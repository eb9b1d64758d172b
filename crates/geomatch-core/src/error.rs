// crates/geomatch-core/src/error.rs

use thiserror::Error;

/// Which reference vocabulary a scoring pass ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabularyKind {
    Cities,
    Countries,
}

impl std::fmt::Display for VocabularyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VocabularyKind::Cities => f.write_str("city"),
            VocabularyKind::Countries => f.write_str("country"),
        }
    }
}

#[derive(Debug, Error)]
pub enum GeoMatchError {
    /// A reference table could not be located.
    #[error("Reference table not found: {0}")]
    NotFound(String),

    /// A reference table parsed but is not a flat string-to-string mapping.
    #[error("Malformed reference data: {0}")]
    MalformedData(String),

    /// Normalization of an address produced zero tokens.
    #[error("Address is empty after normalization")]
    EmptyInput,

    /// A scoring pass was attempted against a vocabulary with no keys.
    #[error("The {0} vocabulary is empty")]
    NoVocabulary(VocabularyKind),

    /// The batch facade received something that is neither a string nor a list of strings.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "cache")]
    #[error("Binary cache error: {0}")]
    Cache(#[from] bincode::Error),

    #[error("Worker pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, GeoMatchError>;
