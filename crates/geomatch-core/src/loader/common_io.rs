// crates/geomatch-core/src/loader/common_io.rs
use crate::error::{GeoMatchError, Result};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};

/// Opens a table file, buffers it, and unwraps gzip for `.gz` paths.
/// The caller gets a plain reader either way.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            GeoMatchError::NotFound(format!("no reference table at {}: {}", path.display(), e))
        }
        _ => GeoMatchError::Io(e),
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(GeoMatchError::MalformedData(format!(
            "{} is gzip-compressed; enable the `compact` feature to read it",
            path.display()
        )))
    }
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// `cities.json` -> `cities.json.<suffix>`, next to the source.
pub fn get_cache_path(json_path: &Path, suffix: &str) -> Option<PathBuf> {
    let filename = json_path.file_name()?.to_string_lossy();
    Some(json_path.with_file_name(format!("{filename}.{suffix}")))
}
