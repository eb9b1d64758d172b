// crates/geomatch-core/src/api.rs

//! Single-or-batch entry point that hashes resolved labels.

use crate::error::{GeoMatchError, Result};
use crate::hash::label_hash;
use crate::resolver::Resolver;
use crate::traits::Scorer;
use serde::Serialize;

/// One address or a batch of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressInput {
    Single(String),
    Batch(Vec<String>),
}

impl From<&str> for AddressInput {
    fn from(s: &str) -> Self {
        AddressInput::Single(s.to_string())
    }
}

impl From<String> for AddressInput {
    fn from(s: String) -> Self {
        AddressInput::Single(s)
    }
}

impl From<Vec<String>> for AddressInput {
    fn from(v: Vec<String>) -> Self {
        AddressInput::Batch(v)
    }
}

impl From<&[&str]> for AddressInput {
    fn from(v: &[&str]) -> Self {
        AddressInput::Batch(v.iter().map(|s| s.to_string()).collect())
    }
}

/// Accepts a JSON string or an array of strings; anything else is
/// [`GeoMatchError::InvalidInput`].
impl TryFrom<serde_json::Value> for AddressInput {
    type Error = GeoMatchError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::String(s) => Ok(AddressInput::Single(s)),
            serde_json::Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| match item {
                    serde_json::Value::String(s) => Ok(s),
                    other => Err(GeoMatchError::InvalidInput(format!(
                        "element {i} is not a string: {other}"
                    ))),
                })
                .collect::<Result<Vec<_>>>()
                .map(AddressInput::Batch),
            other => Err(GeoMatchError::InvalidInput(format!(
                "expected a string or a list of strings, got {other}"
            ))),
        }
    }
}

/// Hashes matching the shape of the [`AddressInput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HashOutput {
    Single(String),
    Batch(Vec<String>),
}

impl<S: Scorer> Resolver<S> {
    /// Resolves the input and returns the SHA-256 of each label.
    ///
    /// `"No match"` hashes like any other label.
    pub fn find_country_hash(
        &self,
        input: impl Into<AddressInput>,
        threshold: u8,
    ) -> Result<HashOutput> {
        match input.into() {
            AddressInput::Single(address) => {
                let result = self.resolve_one(&address, threshold)?;
                Ok(HashOutput::Single(label_hash(&result.label)))
            }
            AddressInput::Batch(addresses) => {
                let results = self.resolve_many(&addresses[..], threshold)?;
                Ok(HashOutput::Batch(
                    results.iter().map(|r| label_hash(&r.label)).collect(),
                ))
            }
        }
    }
}
