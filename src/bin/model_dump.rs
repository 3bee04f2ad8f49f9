//! Dump a model artifact's feature weights, largest magnitude first.
//!
//! Usage:
//!   model_dump <model file>
//!
//! Prints every feature as `feature<TAB>weight`, sorted by descending
//! absolute weight.

use std::process;

use model_inspect::{rank, ModelArtifact};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <model file>", args[0]);
        process::exit(2);
    }

    let vector = match ModelArtifact::from_file(&args[1]) {
        Ok(artifact) => artifact.into_vector(),
        Err(err) => {
            eprintln!("{}: {}", args[1], err);
            process::exit(1);
        }
    };

    for (feature, weight) in rank(&vector) {
        println!("{}\t{:?}", feature, weight);
    }
}
