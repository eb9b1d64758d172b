//! Batch resolution on a small worker pool, printing hashed labels.
//!
//! ```text
//! cargo run --example batch_hashing
//! ```
use geomatch_rs::{AddressInput, HashOutput, MatchOptions, Resolver};

fn main() -> geomatch_rs::Result<()> {
    let resolver = Resolver::load_default(MatchOptions::default().with_workers(2))?;

    let batch: Vec<String> = [
        "Rue de Rivoli 99 Paris",
        "Calle Mayor 5, Madrid",
        "Mannerheimintie 1, Helsinki",
        "Nowhere Lane",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    match resolver.find_country_hash(AddressInput::from(batch.clone()), 0)? {
        HashOutput::Batch(hashes) => {
            for (address, hash) in batch.iter().zip(&hashes) {
                println!("{hash}  {address}");
            }
        }
        HashOutput::Single(hash) => println!("{hash}"),
    }

    // Serializes as a bare string or a list, matching the input shape.
    let single = resolver.find_country_hash("Het Kwadrant 34, Amsterdam", 0)?;
    match serde_json::to_string(&single) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("serialize: {e}"),
    }
    Ok(())
}
