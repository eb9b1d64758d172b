// crates/geomatch-core/src/loader/mod.rs

//! # Table Loader
//!
//! Handles the physical layer (I/O, decompression, binary cache) and hands
//! back validated [`Mapping`]s.

use crate::error::Result;
use crate::store::{Mapping, ReferenceTables};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

pub mod common_io;
mod json;

#[cfg(feature = "cache")]
mod cache;

#[cfg(feature = "cache")]
pub use cache::CACHE_SUFFIX;

// Single in-process copy of the bundled dataset.
static DEFAULT_TABLES: OnceCell<Arc<ReferenceTables>> = OnceCell::new();

pub const CITY_TABLE_FILENAME: &str = "city_to_country_mapping.json";
pub const COUNTRY_TABLE_FILENAME: &str = "country_to_code_mapping.json";

/// Loads one flat string-to-string table.
///
/// - [`GeoMatchError::NotFound`](crate::GeoMatchError::NotFound) if the file does not exist.
/// - [`GeoMatchError::MalformedData`](crate::GeoMatchError::MalformedData) if it is not a JSON object of strings.
///
/// With the `cache` feature a `<file>.bin` cache is consulted and refreshed.
pub fn load_mapping(path: impl AsRef<Path>) -> Result<Mapping> {
    let path = path.as_ref();

    #[cfg(feature = "cache")]
    let mapping = cache::load_mapping_cached(path)?;

    #[cfg(not(feature = "cache"))]
    let mapping = json::load_mapping_json(path)?;

    debug!(path = %path.display(), entries = mapping.len(), "loaded reference table");
    Ok(mapping)
}

/// Like [`load_mapping`] but never touches the binary cache.
pub fn load_mapping_uncached(path: impl AsRef<Path>) -> Result<Mapping> {
    json::load_mapping_json(path.as_ref())
}

impl ReferenceTables {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_city_table_path() -> PathBuf {
        Self::default_data_dir().join(CITY_TABLE_FILENAME)
    }

    pub fn default_country_table_path() -> PathBuf {
        Self::default_data_dir().join(COUNTRY_TABLE_FILENAME)
    }

    /// Loads both tables from disk.
    pub fn load(city_path: impl AsRef<Path>, country_path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(load_mapping(city_path)?, load_mapping(country_path)?))
    }

    /// Loads the bundled dataset once per process.
    ///
    /// Every call after the first returns the same shared tables without
    /// touching the disk.
    pub fn load_default() -> Result<Arc<Self>> {
        DEFAULT_TABLES
            .get_or_try_init(|| {
                Self::load(
                    Self::default_city_table_path(),
                    Self::default_country_table_path(),
                )
                .map(Arc::new)
            })
            .cloned()
    }
}
