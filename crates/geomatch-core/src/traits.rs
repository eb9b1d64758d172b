// crates/geomatch-core/src/traits.rs

/// Similarity capability used by the resolver.
///
/// Implementors only provide a raw similarity in `[0, 1]`; the provided
/// [`Scorer::score`] turns it into the 0..=100 confidence the resolver works
/// with. Both arguments are already in scoring form (see
/// [`crate::text::scoring_form`]).
///
/// Contract:
/// - symmetric in its arguments
/// - `score(a, b) == 100` if and only if `a == b`
/// - an empty argument scores 0
///
/// # Examples
/// ```rust
/// use geomatch_core::traits::Scorer;
///
/// #[derive(Debug)]
/// struct Exact;
/// impl Scorer for Exact {
///     fn similarity(&self, a: &str, b: &str) -> f64 {
///         if a == b { 1.0 } else { 0.0 }
///     }
/// }
///
/// assert_eq!(Exact.score("lima", "lima"), 100);
/// assert_eq!(Exact.score("lima", "lyon"), 0);
/// ```
pub trait Scorer: Send + Sync + std::fmt::Debug {
    /// Raw similarity in `[0, 1]`.
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Confidence in `0..=100`.
    #[inline]
    fn score(&self, a: &str, b: &str) -> u8 {
        if a.is_empty() || b.is_empty() {
            return 0;
        }
        if a == b {
            return 100;
        }
        crate::score::to_confidence(self.similarity(a, b))
    }
}
