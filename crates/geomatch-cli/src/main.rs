//! geomatch: resolve postal addresses to country codes
//!
//! Usage examples
//! --------------
//!
//! - Resolve one address
//!   $ geomatch resolve "Het Kwadrant 34, Amsterdam"
//!
//! - Hash the resolved country of several addresses
//!   $ geomatch hash "Rue de Rivoli 99 Paris" "Calle Mayor 5, Madrid"
//!
//! - Resolve a file of addresses, one per line, with a stricter threshold
//!   $ geomatch --threshold 80 batch addresses.txt
//!
//! - Check accuracy against labelled data
//!   $ geomatch evaluate tests/data/addresses.jsonl --min-accuracy 0.9
//!
//! Data source
//! -----------
//!
//! By default the bundled tables from `geomatch-core/data` are used. Point
//! `--cities` and `--countries` at your own flat JSON objects to replace them.
mod args;
mod logging;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use geomatch_core::{
    hash::label_hash, read_labeled_jsonl, MatchOptions, Resolver,
};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init_logging(&logging::LogConfig::from_flags(args.verbose, args.quiet));

    let base = match &args.config {
        Some(path) => MatchOptions::from_path(path)
            .with_context(|| format!("reading options from {}", path.display()))?,
        None => MatchOptions::default(),
    };
    let options = args.apply_overrides(base);
    debug!(?options, "effective options");

    let threshold = options.threshold;
    let resolver = match (&args.cities, &args.countries) {
        (Some(cities), Some(countries)) => Resolver::from_paths(cities, countries, options)
            .context("loading reference tables")?,
        _ => Resolver::load_default(options).context("loading bundled reference tables")?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Commands::Resolve { address } => {
            let result = resolver.resolve_one(&address, threshold)?;
            writeln!(out, "{}\t{}", result.label, result.confidence)?;
        }

        Commands::Hash { addresses } => {
            for result in resolver.resolve_many(&addresses[..], threshold)? {
                writeln!(out, "{}", label_hash(&result.label))?;
            }
        }

        Commands::Batch { input, jsonl, hash } => {
            let addresses = read_addresses(&input, jsonl)?;
            let results = resolver.resolve_many(&addresses[..], threshold)?;
            for result in results {
                if hash {
                    writeln!(out, "{}", label_hash(&result.label))?;
                } else {
                    writeln!(out, "{}\t{}", result.label, result.confidence)?;
                }
            }
        }

        Commands::Tokens { address } => {
            for token in resolver.tokenize(&address).iter() {
                writeln!(out, "{token:?}")?;
            }
        }

        Commands::Evaluate {
            input,
            min_accuracy,
        } => {
            let records = read_labeled_jsonl(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let evaluation = resolver.evaluate(&records, threshold)?;
            writeln!(
                out,
                "Accuracy: {:.2}% ({} / {})",
                evaluation.accuracy() * 100.0,
                evaluation.correct,
                evaluation.total
            )?;
            for miss in &evaluation.mismatches {
                let record = &records[miss.index];
                writeln!(
                    out,
                    "  miss: {:?} expected {} got {} ({})",
                    record.address, record.country, miss.result.label, miss.result.confidence
                )?;
            }
            if let Some(min) = min_accuracy {
                if evaluation.accuracy() < min {
                    bail!(
                        "accuracy {:.4} is below the required {:.4}",
                        evaluation.accuracy(),
                        min
                    );
                }
            }
        }

        Commands::Stats => {
            let stats = resolver.tables().stats();
            writeln!(out, "Reference tables:")?;
            writeln!(out, "  Cities: {}", stats.cities)?;
            writeln!(out, "  Countries: {}", stats.countries)?;
        }
    }

    Ok(())
}

/// One address per line, blank lines included so output lines up with input.
/// With `jsonl`, the `address` field of each non-blank JSON line.
fn read_addresses(input: &Path, jsonl: bool) -> anyhow::Result<Vec<String>> {
    let reader: Box<dyn Read> = if input == Path::new("-") {
        Box::new(io::stdin())
    } else {
        Box::new(
            std::fs::File::open(input)
                .with_context(|| format!("opening {}", input.display()))?,
        )
    };

    let mut addresses = Vec::new();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.with_context(|| format!("reading {}", input.display()))?;
        if !jsonl {
            addresses.push(line);
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        let value: serde_json::Value = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid JSON", input.display(), i + 1))?;
        match value.get("address").and_then(serde_json::Value::as_str) {
            Some(address) => addresses.push(address.to_string()),
            None => bail!(
                "{}:{}: missing string field \"address\"",
                input.display(),
                i + 1
            ),
        }
    }
    Ok(addresses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn plain_input_keeps_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("addresses.txt");
        std::fs::write(&path, "Het Kwadrant 34, Amsterdam\n\nRue de Rivoli 99 Paris\n").unwrap();

        let addresses = read_addresses(&path, false).unwrap();
        assert_eq!(
            addresses,
            ["Het Kwadrant 34, Amsterdam", "", "Rue de Rivoli 99 Paris"]
        );
    }

    #[test]
    fn jsonl_input_reads_address_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.jsonl");
        std::fs::write(
            &path,
            "{\"address\": \"Calle Mayor 5, Madrid\", \"country\": \"ES\"}\n\n{\"address\": \"Nowhere Lane\"}\n",
        )
        .unwrap();

        let addresses = read_addresses(&path, true).unwrap();
        assert_eq!(addresses, ["Calle Mayor 5, Madrid", "Nowhere Lane"]);
    }

    #[test]
    fn jsonl_without_address_names_the_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.jsonl");
        std::fs::write(&path, "{\"address\": \"a\"}\n{\"country\": \"NL\"}\n").unwrap();

        let err = read_addresses(&path, true).unwrap_err();
        assert!(err.to_string().contains(":2:"), "{err}");
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(read_addresses(&dir.path().join("nope.txt"), false).is_err());
    }
}
