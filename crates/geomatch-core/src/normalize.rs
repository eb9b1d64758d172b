// crates/geomatch-core/src/normalize.rs

//! # Address Normalizer
//!
//! Turns a raw address into candidate tokens, last-written component first.
//! City and country information tends to sit at the end of a written
//! address, so token 0 is the strongest signal.

use serde::{Deserialize, Serialize};

/// How an address is cut into tokens.
///
/// The two strategies are not equivalent and are never combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitStrategy {
    /// Split on commas if the address has any, otherwise on whitespace.
    /// Segments keep their surrounding spaces and interior punctuation.
    #[default]
    CommaAware,
    /// Remove ASCII punctuation, then split on whitespace.
    StripPunctuation,
}

/// Ordered tokens of one address, most specific first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressTokens(Vec<String>);

impl AddressTokens {
    /// The most specific token, if any.
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for AddressTokens {
    fn from(tokens: Vec<String>) -> Self {
        Self(tokens)
    }
}

impl<'a> IntoIterator for &'a AddressTokens {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Normalize with the default [`SplitStrategy::CommaAware`] strategy.
///
/// ```rust
/// use geomatch_core::normalize::normalize;
///
/// let tokens = normalize("Het Kwadrant 34, Amsterdam");
/// assert_eq!(tokens.as_slice(), [" amsterdam", "het kwadrant 34"]);
///
/// let tokens = normalize("Het Kwadrant 34 Amsterdam");
/// assert_eq!(tokens.as_slice(), ["amsterdam", "34", "kwadrant", "het"]);
/// ```
pub fn normalize(address: &str) -> AddressTokens {
    normalize_with(address, SplitStrategy::CommaAware)
}

pub fn normalize_with(address: &str, strategy: SplitStrategy) -> AddressTokens {
    let lowered = address.to_lowercase();

    let mut tokens: Vec<String> = match strategy {
        SplitStrategy::CommaAware => {
            if lowered.contains(',') {
                lowered.split(',').map(str::to_owned).collect()
            } else {
                lowered.split_whitespace().map(str::to_owned).collect()
            }
        }
        SplitStrategy::StripPunctuation => {
            let stripped: String = lowered
                .chars()
                .filter(|c| !c.is_ascii_punctuation())
                .collect();
            stripped.split_whitespace().map(str::to_owned).collect()
        }
    };

    tokens.reverse();
    AddressTokens(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_split_keeps_segment_whitespace() {
        let tokens = normalize("Main St. 1 ,  Springfield ,USA");
        assert_eq!(tokens.as_slice(), ["usa", "  springfield ", "main st. 1 "]);
    }

    #[test]
    fn strip_punctuation_drops_commas_too() {
        let tokens = normalize_with("Het Kwadrant 34, Amsterdam!", SplitStrategy::StripPunctuation);
        assert_eq!(tokens.as_slice(), ["amsterdam", "34", "kwadrant", "het"]);
    }

    #[test]
    fn blank_input_has_no_tokens() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \t ").is_empty());
        assert!(normalize_with("...", SplitStrategy::StripPunctuation).is_empty());
    }

    #[test]
    fn lone_comma_yields_empty_segments() {
        let tokens = normalize(",");
        assert_eq!(tokens.as_slice(), ["", ""]);
        assert_eq!(tokens.first(), Some(""));
    }
}
