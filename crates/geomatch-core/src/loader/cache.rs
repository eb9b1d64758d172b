// crates/geomatch-core/src/loader/cache.rs

// ---------------------------------------------------------------------------
// FILE GUARD: only compiled with the 'cache' feature.
// ---------------------------------------------------------------------------
#![cfg(feature = "cache")]

use super::common_io::get_cache_path;
use super::json::load_mapping_json;
use crate::error::Result;
use crate::hash::digest_hex;
use crate::store::Mapping;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

pub const CACHE_SUFFIX: &str = "bin";

/// On-disk cache record: the table plus the digest of the bytes it came from.
#[derive(Serialize, Deserialize)]
struct CachedMapping {
    source_sha256: String,
    mapping: Mapping,
}

/// Loads a table through its `<file>.bin` cache.
///
/// 1) Use the cache if it decodes and was built from a source with the same
///    SHA-256 as the file now at `path`.
/// 2) Otherwise parse the source JSON.
/// 3) Best-effort: rewrite the cache (failures are logged, not returned).
pub fn load_mapping_cached(path: &Path) -> Result<Mapping> {
    let Some(cache_path) = get_cache_path(path, CACHE_SUFFIX) else {
        return load_mapping_json(path);
    };
    // An unreadable source is reported by the JSON loader below.
    let Ok(source) = std::fs::read(path) else {
        return load_mapping_json(path);
    };
    let source_sha256 = digest_hex(&source);

    match std::fs::read(&cache_path).map(|bytes| bincode::deserialize::<CachedMapping>(&bytes)) {
        Ok(Ok(cached)) if cached.source_sha256 == source_sha256 => {
            debug!(cache = %cache_path.display(), entries = cached.mapping.len(), "loaded table from cache");
            return Ok(cached.mapping);
        }
        Ok(Ok(_)) => debug!(cache = %cache_path.display(), "source changed, rebuilding cache"),
        Ok(Err(e)) => warn!(cache = %cache_path.display(), error = %e, "ignoring undecodable cache"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!(cache = %cache_path.display(), error = %e, "ignoring unreadable cache"),
    }

    let record = CachedMapping {
        source_sha256,
        mapping: load_mapping_json(path)?,
    };

    match bincode::serialize(&record) {
        Ok(bin) => {
            if let Err(e) = std::fs::write(&cache_path, bin) {
                warn!(cache = %cache_path.display(), error = %e, "could not write table cache");
            }
        }
        Err(e) => warn!(error = %e, "could not encode table cache"),
    }

    Ok(record.mapping)
}
