use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the reference tables.
///
/// Returned by [`crate::ReferenceTables::stats`], these counts reflect the
/// tables as loaded, after duplicate keys were collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
    pub cities: usize,
    pub countries: usize,
}

/// Sentinel label returned when no reference entry is close enough.
pub const NO_MATCH: &str = "No match";
