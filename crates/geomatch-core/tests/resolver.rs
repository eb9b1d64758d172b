mod common;

use common::{fixture_resolver, fixture_resolver_with, fixture_tables};
use geomatch_core::{
    normalize, GeoMatchError, Mapping, MatchOptions, MatchResult, ReferenceTables, Resolver,
    Scorer, ScorerKind, SplitStrategy, VocabularyKind, NO_MATCH,
};

#[test]
fn exact_city_wins_regardless_of_threshold() {
    let resolver = fixture_resolver();
    let result = resolver.resolve_one("Het Kwadrant 34, Amsterdam", 100).unwrap();
    assert_eq!(result, MatchResult::new("NL", 100));
}

#[test]
fn exact_country_name_short_circuits() {
    let resolver = fixture_resolver();
    let result = resolver.resolve_one("Somewhere 1, Paris, Germany", 100).unwrap();
    assert_eq!(result, MatchResult::new("DE", 100));
}

#[test]
fn country_names_are_only_probed_on_the_first_token() {
    let resolver = fixture_resolver();
    let result = resolver.resolve_one("Germany, Xyzzy", 0).unwrap();
    assert_ne!(result.label, "DE");
    assert!(result.confidence < 100);
}

#[test]
fn every_single_word_key_resolves_exactly() {
    let resolver = fixture_resolver();
    let tables = fixture_tables();

    for (city, country) in tables.city_to_country().iter() {
        if city.contains(' ') {
            continue;
        }
        assert_eq!(resolver.resolve_one(city, 100).unwrap(), MatchResult::new(country, 100));
    }
    for (name, code) in tables.country_name_to_code().iter() {
        assert_eq!(resolver.resolve_one(name, 100).unwrap(), MatchResult::new(code, 100));
    }
}

#[test]
fn multi_word_city_matches_as_its_own_segment() {
    let resolver = fixture_resolver();
    assert_eq!(
        resolver.resolve_one("5th Avenue, New York", 0).unwrap(),
        MatchResult::new("US", 100)
    );
}

#[test]
fn threshold_is_exclusive() {
    let resolver = fixture_resolver();
    // "amsterdm" vs "amsterdam": 16 / 17
    assert_eq!(resolver.resolve_one("Amsterdm", 90).unwrap(), MatchResult::new("NL", 94));
    assert_eq!(resolver.resolve_one("Amsterdm", 94).unwrap(), MatchResult::no_match(94));
    assert_eq!(resolver.resolve_one("Amsterdm", 95).unwrap(), MatchResult::no_match(94));
}

#[test]
fn earlier_token_wins_ties() {
    let resolver = fixture_resolver();
    // both tokens score 80 against their closest city; the last-written one is token 0
    assert_eq!(resolver.resolve_one("Turix, Parix", 0).unwrap(), MatchResult::new("FR", 80));
    assert_eq!(resolver.resolve_one("Parix, Turix", 0).unwrap(), MatchResult::new("IT", 80));
}

#[test]
fn earlier_key_wins_ties() {
    let countries: Mapping = [("france", "FR")].into_iter().collect();

    let first: Mapping = [("bern", "CH"), ("berm", "ZZ")].into_iter().collect();
    let resolver = Resolver::new(ReferenceTables::new(first, countries.clone())).unwrap();
    assert_eq!(resolver.resolve_one("ber", 0).unwrap().label, "CH");

    let swapped: Mapping = [("berm", "ZZ"), ("bern", "CH")].into_iter().collect();
    let resolver = Resolver::new(ReferenceTables::new(swapped, countries)).unwrap();
    assert_eq!(resolver.resolve_one("ber", 0).unwrap().label, "ZZ");
}

#[test]
fn empty_addresses_degrade_to_no_match() {
    let resolver = fixture_resolver();
    for address in ["", "   ", "\t\n", ",", ", ,"] {
        assert_eq!(
            resolver.resolve_one(address, 0).unwrap(),
            MatchResult::no_match(0),
            "address {address:?}"
        );
    }
}

#[test]
fn empty_tokens_are_reported_by_resolve_tokens() {
    let resolver = fixture_resolver();
    let err = resolver.resolve_tokens(&normalize(""), 0).unwrap_err();
    assert!(matches!(err, GeoMatchError::EmptyInput));
}

#[test]
fn empty_city_vocabulary_is_fatal() {
    let tables = ReferenceTables::new(
        Mapping::default(),
        [("france", "FR")].into_iter().collect(),
    );
    let resolver = Resolver::new(tables).unwrap();

    let err = resolver.resolve_one("Lyon", 0).unwrap_err();
    assert!(matches!(err, GeoMatchError::NoVocabulary(VocabularyKind::Cities)));

    // the country fast path returns before the city table is consulted
    assert_eq!(resolver.resolve_one("France", 0).unwrap(), MatchResult::new("FR", 100));
}

#[test]
fn empty_country_vocabulary_is_fatal() {
    let tables = ReferenceTables::new([("lyon", "FR")].into_iter().collect(), Mapping::default());
    let resolver = Resolver::new(tables).unwrap();

    let err = resolver.resolve_one("Lyon", 0).unwrap_err();
    assert!(matches!(err, GeoMatchError::NoVocabulary(VocabularyKind::Countries)));

    let err = resolver.resolve_many(&["Lyon", "Paris"], 0).unwrap_err();
    assert!(matches!(err, GeoMatchError::NoVocabulary(_)));
}

#[test]
fn malformed_tables_are_rejected_at_construction() {
    let err = Resolver::from_json(
        serde_json::json!({"paris": ["FR"]}),
        serde_json::json!({"france": "FR"}),
    )
    .unwrap_err();
    assert!(matches!(err, GeoMatchError::MalformedData(_)));
}

#[test]
fn diacritics_fold_only_when_enabled() {
    let plain = fixture_resolver();
    assert_eq!(plain.resolve_one("Zürich", 0).unwrap(), MatchResult::new("CH", 83));

    let folding = fixture_resolver_with(MatchOptions::default().with_fold_diacritics(true));
    assert_eq!(folding.resolve_one("Zürich", 0).unwrap(), MatchResult::new("CH", 100));
}

#[test]
fn split_strategy_changes_multi_word_matching() {
    let comma = fixture_resolver();
    let strip = fixture_resolver_with(
        MatchOptions::default().with_split(SplitStrategy::StripPunctuation),
    );

    assert_eq!(
        comma.resolve_one("5th Avenue, New York", 0).unwrap(),
        MatchResult::new("US", 100)
    );
    assert!(strip.resolve_one("5th Avenue, New York", 0).unwrap().confidence < 100);
}

#[test]
fn jaro_winkler_keeps_exact_matches_perfect() {
    let resolver =
        fixture_resolver_with(MatchOptions::default().with_scorer(ScorerKind::JaroWinkler));
    assert_eq!(resolver.resolve_one("Rue de Rivoli, Paris", 0).unwrap(), MatchResult::new("FR", 100));
    assert!(resolver.resolve_one("Amsterdm", 0).unwrap().confidence < 100);
}

#[derive(Debug)]
struct PrefixScorer;

impl Scorer for PrefixScorer {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if b.starts_with(a) || a.starts_with(b) {
            0.9
        } else {
            0.0
        }
    }
}

#[test]
fn custom_scorer_plugs_in() {
    let resolver =
        Resolver::with_scorer(fixture_tables(), PrefixScorer, MatchOptions::default()).unwrap();
    assert_eq!(resolver.resolve_one("Rotter", 0).unwrap(), MatchResult::new("NL", 90));
    assert_eq!(resolver.resolve_one("Rotter", 90).unwrap(), MatchResult::no_match(90));
    assert_eq!(resolver.resolve_one("Qqq", 0).unwrap(), MatchResult::no_match(0));
    assert_eq!(resolver.resolve_one("Paris", 0).unwrap().label, "FR");
}

#[test]
fn no_match_sentinel_is_not_a_match() {
    let result = MatchResult::no_match(12);
    assert_eq!(result.label, NO_MATCH);
    assert!(!result.is_match());
    assert!(MatchResult::new("NL", 1).is_match());
}
