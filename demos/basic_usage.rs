//! Resolve a handful of addresses against the bundled tables.
//!
//! ```text
//! cargo run --example basic_usage
//! ```
use geomatch_rs::{MatchOptions, Resolver};

fn main() -> geomatch_rs::Result<()> {
    let resolver = Resolver::load_default(MatchOptions::default())?;
    let stats = resolver.tables().stats();
    println!("{} cities, {} countries", stats.cities, stats.countries);

    for address in [
        "Het Kwadrant 34, Amsterdam",
        "Unter den Linden 77, 10117 Berlin, Germany",
        "Bahnhofstrasse 1, 8001 Zurich",
        "Via Roma 10 Milan",
        "Nowhere Lane",
    ] {
        let tokens = resolver.tokenize(address);
        let result = resolver.resolve_one(address, 0)?;
        println!(
            "{address:<45} -> {:<8} {:>3}  tokens={:?}",
            result.label,
            result.confidence,
            tokens.as_slice()
        );
    }

    // A strict threshold turns weak fuzzy hits into "No match".
    let strict = resolver.resolve_one("Bahnhofstrasse 1, 8001 Zurick", 95)?;
    println!("strict: {} ({})", strict.label, strict.confidence);
    Ok(())
}
