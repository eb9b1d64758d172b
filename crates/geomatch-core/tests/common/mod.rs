#![allow(dead_code)]

use geomatch_core::{MatchOptions, ReferenceTables, Resolver};
use serde_json::json;

pub fn fixture_tables() -> ReferenceTables {
    ReferenceTables::from_json(
        json!({
            "amsterdam": "NL",
            "rotterdam": "NL",
            "berlin": "DE",
            "bern": "CH",
            "paris": "FR",
            "turin": "IT",
            "new york": "US",
            "zurich": "CH"
        }),
        json!({
            "netherlands": "NL",
            "germany": "DE",
            "france": "FR",
            "switzerland": "CH"
        }),
    )
    .expect("fixture tables are well-formed")
}

pub fn fixture_resolver() -> Resolver {
    Resolver::new(fixture_tables()).expect("resolver")
}

pub fn fixture_resolver_with(options: MatchOptions) -> Resolver {
    Resolver::with_options(fixture_tables(), options).expect("resolver")
}
