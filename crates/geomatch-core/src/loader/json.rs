// crates/geomatch-core/src/loader/json.rs

use super::common_io::open_stream;
use crate::error::{GeoMatchError, Result};
use crate::store::Mapping;
use std::path::Path;

/// Parses a flat JSON object of strings from disk (plain or `.gz`).
pub fn load_mapping_json(path: &Path) -> Result<Mapping> {
    let reader = open_stream(path)?;
    let value: serde_json::Value = serde_json::from_reader(reader).map_err(|e| {
        GeoMatchError::MalformedData(format!("{} is not valid JSON: {}", path.display(), e))
    })?;
    Mapping::from_json(value, &path.display().to_string())
}
