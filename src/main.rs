//! Command-line shell around the global alignment engine.
//!
//! Parses scoring parameters and two sequences, runs the aligner, and prints
//! the score table plus the optimal alignment in ASCII or as an HTML page.

use std::env;
use std::process;

use nw_aligner::config::{OutputFormat, RunConfig, MAX_SEQUENCE_LEN};
use nw_aligner::render;
use nw_aligner::GlobalAligner;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("nw_aligner {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let config = match RunConfig::from_args(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("Error: {msg}");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    let aligner = GlobalAligner::new(config.params);
    let (matrix, result) = match aligner.align(&config.seq1, &config.seq2) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    let output = match config.format {
        OutputFormat::Ascii => render::render_ascii(&matrix, &result, &config.seq1, &config.seq2),
        OutputFormat::Html => {
            render::render_html(&matrix, &result, &config.seq1, &config.seq2, true)
        }
    };
    print!("{output}");
}

fn print_usage() {
    println!("nw_aligner {}", env!("CARGO_PKG_VERSION"));
    println!("Needleman-Wunsch global pairwise alignment");
    println!();
    println!("USAGE:");
    println!("    nw_aligner [OPTIONS] [SEQ1] [SEQ2]");
    println!();
    println!("ARGS:");
    println!("    SEQ1    First sequence  (default: ACAGTCGAACG)");
    println!("    SEQ2    Second sequence (default: ACCGTCCG)");
    println!();
    println!("OPTIONS:");
    println!("    --match N       Match score       (default: 1)");
    println!("    --mismatch N    Mismatch score    (default: 0)");
    println!("    --gap N         Gap penalty       (default: -1)");
    println!("    --html          Emit a full HTML page instead of ASCII");
    println!("    -h, --help      Show this help message");
    println!("    -V, --version   Show version information");
    println!();
    println!("Non-numeric scores fall back to their defaults; sequences longer");
    println!("than {MAX_SEQUENCE_LEN} symbols are truncated.");
}
