//! geomatch-cli
//! ============
//!
//! Command-line interface for `geomatch-core`, the fuzzy address to country
//! resolver.
//!
//! This crate primarily provides a binary (`geomatch`). The small library
//! target exists so that docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install geomatch-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! geomatch --help
//! geomatch stats
//! geomatch resolve "Het Kwadrant 34, Amsterdam"
//! geomatch hash "Rue de Rivoli 99 Paris" "Calle Mayor 5, Madrid"
//! geomatch --threshold 80 batch addresses.txt
//! geomatch evaluate labelled.jsonl --min-accuracy 0.9
//! ```
//!
//! Logs go to stderr (`-v`, `-vv`, `-q`, or `RUST_LOG`); results go to stdout.
//!
//! For programmatic access use the [`geomatch-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// No API here; the binary is the deliverable.
