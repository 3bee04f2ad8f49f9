//! Build a simple web page for eyeballing predictions one example at a time.
//!
//! Reads prediction lines (instance JSON, an unused field, the predicted
//! score, tab-separated) and writes a single HTML document with one block
//! per example, colored by how far the prediction landed from the label.
//! Depends on the supporting data carried in the instance itself; currently
//! only binary classification problems are supported.
//!
//! Usage:
//!   prediction_report [options]
//!
//! Options:
//!   --out <path>     Destination of the generated html (default: stdout)
//!   --file <path>    File with input predictions (default: stdin)
//!   --label <value>  Only keep examples with this label
//!   --limit <n>      Maximum number of examples to display (default: 1000)

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use log::info;

use model_inspect::{render, ReportConfig};

struct Args {
    out: Option<PathBuf>,
    file: Option<PathBuf>,
    label: Option<String>,
    limit: usize,
}

fn usage() {
    eprintln!(
        "prediction_report\n\n  --out <path>     Destination of the generated html (default: stdout)\n  --file <path>    File with input predictions (default: stdin)\n  --label <value>  Only keep examples with this label\n  --limit <n>      Maximum number of examples to display (default: 1000)"
    );
}

fn next_value(it: &mut impl Iterator<Item = String>, flag: &str) -> String {
    it.next().unwrap_or_else(|| {
        eprintln!("missing value for {}", flag);
        usage();
        process::exit(2);
    })
}

fn parse_args() -> Args {
    let mut out: Option<PathBuf> = None;
    let mut file: Option<PathBuf> = None;
    let mut label: Option<String> = None;
    let mut limit = 1000usize;

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--out" => out = Some(PathBuf::from(next_value(&mut it, "--out"))),
            "--file" => file = Some(PathBuf::from(next_value(&mut it, "--file"))),
            "--label" => label = Some(next_value(&mut it, "--label")),
            "--limit" => {
                let value = next_value(&mut it, "--limit");
                limit = value.parse().unwrap_or_else(|_| {
                    eprintln!("invalid --limit value: {}", value);
                    process::exit(2);
                });
            }
            "--help" => {
                usage();
                process::exit(0);
            }
            other => {
                eprintln!("unknown arg: {}", other);
                usage();
                process::exit(2);
            }
        }
    }

    Args { out, file, label, limit }
}

fn main() {
    env_logger::init();

    let args = parse_args();
    let config = ReportConfig {
        label_filter: args.label,
        limit: args.limit,
        ..ReportConfig::default()
    };

    let input: Box<dyn BufRead> = match &args.file {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(err) => {
                eprintln!("{}: {}", path.display(), err);
                process::exit(1);
            }
        },
        None => Box::new(BufReader::new(io::stdin())),
    };

    let out: Box<dyn Write> = match &args.out {
        Some(path) => match File::create(path) {
            Ok(file) => Box::new(BufWriter::new(file)),
            Err(err) => {
                eprintln!("{}: {}", path.display(), err);
                process::exit(1);
            }
        },
        None => Box::new(io::stdout()),
    };

    match render(input, out, &config) {
        Ok(stats) => info!(
            "emitted {} record(s); skipped {} malformed, {} filtered, {} oversized, {} on write",
            stats.emitted,
            stats.skipped_parse,
            stats.skipped_filter,
            stats.skipped_oversize,
            stats.skipped_write
        ),
        Err(err) => {
            eprintln!("report generation failed: {}", err);
            process::exit(1);
        }
    }
}
