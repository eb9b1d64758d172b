use geomatch_core::{read_labeled_jsonl, GeoMatchError, MatchOptions, Resolver};
use std::path::PathBuf;
use tempfile::TempDir;

fn addresses_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("addresses.jsonl")
}

#[test]
fn reads_labelled_lines_skipping_blanks() {
    let records = read_labeled_jsonl(addresses_path()).unwrap();
    assert_eq!(records.len(), 10);
    assert_eq!(records[0].address, "Het Kwadrant 34, Amsterdam");
    assert_eq!(records[0].country, "NL");
}

#[test]
fn bad_line_reports_its_number() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.jsonl");
    std::fs::write(&path, "{\"address\": \"a\", \"country\": \"b\"}\n{\"address\": 1}\n").unwrap();

    let err = read_labeled_jsonl(&path).unwrap_err();
    assert!(matches!(err, GeoMatchError::MalformedData(ref msg) if msg.contains(":2:")), "{err}");
}

#[test]
fn bundled_dataset_reaches_minimum_accuracy() {
    let resolver = Resolver::load_default(MatchOptions::default()).unwrap();
    let records = read_labeled_jsonl(addresses_path()).unwrap();

    let evaluation = resolver.evaluate(&records, 0).unwrap();
    assert_eq!(evaluation.total, 10);
    assert_eq!(evaluation.correct, 9);
    let missed: Vec<usize> = evaluation.mismatches.iter().map(|m| m.index).collect();
    assert_eq!(missed, vec![9]);
    let miss = &evaluation.mismatches[0];
    assert_ne!(miss.result.label, records[9].country);
    assert_eq!(
        miss.result,
        resolver.resolve_one(&records[9].address, 0).unwrap()
    );
    assert!(evaluation.accuracy() >= 0.9);
}

#[test]
fn empty_evaluation_has_zero_accuracy() {
    let resolver = Resolver::load_default(MatchOptions::default()).unwrap();
    let evaluation = resolver.evaluate(&[], 0).unwrap();
    assert_eq!(evaluation.total, 0);
    assert_eq!(evaluation.accuracy(), 0.0);
}
