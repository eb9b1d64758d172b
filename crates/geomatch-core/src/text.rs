// crates/geomatch-core/src/text.rs

//! String folding shared by the normalizer and the scorers.

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use geomatch_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Straße"), "strasse");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Prepares a string for similarity scoring.
///
/// Every character that is not alphanumeric becomes a space, the result is
/// lower-cased and trimmed at both ends. Interior runs of spaces are kept.
///
/// ```rust
/// use geomatch_core::text::scoring_form;
///
/// assert_eq!(scoring_form(" Amsterdam"), "amsterdam");
/// assert_eq!(scoring_form("Saint-Étienne!"), "saint étienne");
/// ```
pub fn scoring_form(s: &str) -> String {
    let replaced: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    replaced.to_lowercase().trim().to_string()
}

/// [`scoring_form`], optionally passed through [`fold_key`] first.
pub fn scoring_form_with(s: &str, fold_diacritics: bool) -> String {
    if fold_diacritics {
        scoring_form(&fold_key(s))
    } else {
        scoring_form(s)
    }
}
