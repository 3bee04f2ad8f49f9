//! Compare the feature-weight vectors of two model artifacts.
//!
//! Usage:
//!   model_diff <model file> <model file>
//!
//! Prints one tab-separated line per feature whose weight changed by more
//! than the noise threshold, sorted by descending absolute delta:
//!   feature<TAB>weight in A<TAB>weight in B<TAB>(delta)
//! Features absent from one artifact are shown with weight 0.0.

use std::process;

use model_inspect::{diff, round_sig, FeatureVector, ModelArtifact};

fn load_or_exit(path: &str) -> FeatureVector {
    match ModelArtifact::from_file(path) {
        Ok(artifact) => artifact.into_vector(),
        Err(err) => {
            eprintln!("{}: {}", path, err);
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <model file> <model file>", args[0]);
        process::exit(2);
    }

    let a = load_or_exit(&args[1]);
    let b = load_or_exit(&args[2]);

    for row in diff(&a, &b) {
        println!(
            "{}\t{:?}\t{:?}\t({:?})",
            row.feature,
            row.in_a.unwrap_or(0.0),
            row.in_b.unwrap_or(0.0),
            round_sig(row.delta)
        );
    }
}
