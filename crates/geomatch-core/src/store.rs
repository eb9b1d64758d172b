// crates/geomatch-core/src/store.rs

//! # Reference Store
//!
//! The two immutable lookup tables. Entry order is the order of the source
//! document and is what scoring ties are broken on.

use crate::common::TableStats;
use crate::error::{GeoMatchError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A flat, ordered string-to-string table with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    entries: Vec<(String, String)>,
}

impl Mapping {
    /// Validates a parsed JSON document as a flat object of strings.
    ///
    /// `source` only shows up in error messages.
    pub fn from_json(value: serde_json::Value, source: &str) -> Result<Self> {
        let object = match value {
            serde_json::Value::Object(object) => object,
            other => {
                return Err(GeoMatchError::MalformedData(format!(
                    "{source}: expected a JSON object of strings, found {}",
                    json_kind(&other)
                )))
            }
        };

        let mut entries = Vec::with_capacity(object.len());
        for (key, value) in object {
            match value {
                serde_json::Value::String(s) => entries.push((key, s)),
                other => {
                    return Err(GeoMatchError::MalformedData(format!(
                        "{source}: value for key {key:?} is {}, expected a string",
                        json_kind(&other)
                    )))
                }
            }
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in table order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Exact key lookup. Linear; tables are small.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn key_at(&self, index: usize) -> &str {
        &self.entries[index].0
    }

    /// Value of the entry at `index` (table order).
    pub(crate) fn value_at(&self, index: usize) -> &str {
        &self.entries[index].1
    }
}

/// Later duplicates overwrite the value but keep the first position, like a
/// JSON object with repeated keys.
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<(String, String)> = Vec::new();
        for (k, v) in iter {
            let (k, v) = (k.into(), v.into());
            match positions.get(&k) {
                Some(&i) => entries[i].1 = v,
                None => {
                    positions.insert(k.clone(), entries.len());
                    entries.push((k, v));
                }
            }
        }
        Self { entries }
    }
}

/// The city and country tables a resolver matches against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceTables {
    city_to_country: Mapping,
    country_name_to_code: Mapping,
}

impl ReferenceTables {
    pub fn new(city_to_country: Mapping, country_name_to_code: Mapping) -> Self {
        Self {
            city_to_country,
            country_name_to_code,
        }
    }

    /// Builds the tables from two dynamically typed JSON documents.
    ///
    /// Fails with [`GeoMatchError::MalformedData`] unless both are flat
    /// string-keyed, string-valued objects.
    pub fn from_json(
        city_to_country: serde_json::Value,
        country_name_to_code: serde_json::Value,
    ) -> Result<Self> {
        Ok(Self::new(
            Mapping::from_json(city_to_country, "city_to_country")?,
            Mapping::from_json(country_name_to_code, "country_name_to_code")?,
        ))
    }

    pub fn city_to_country(&self) -> &Mapping {
        &self.city_to_country
    }

    pub fn country_name_to_code(&self) -> &Mapping {
        &self.country_name_to_code
    }

    pub fn city_keys(&self) -> impl Iterator<Item = &str> {
        self.city_to_country.keys()
    }

    pub fn country_keys(&self) -> impl Iterator<Item = &str> {
        self.country_name_to_code.keys()
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            cities: self.city_to_country.len(),
            countries: self.country_name_to_code.len(),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
