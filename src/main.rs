//! Runs a perft regression suite from the command line:
//!
//! ```text
//! chess_engine <suite-file> [max-depth]
//! ```
//!
//! Exits 0 if every case passes up to the requested depth, non-zero
//! otherwise.

use std::process::ExitCode;

use chess_engine::perft_suite::{read_suite, run_suite};

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: chess_engine <suite-file> [max-depth]");
        return ExitCode::FAILURE;
    };
    let max_depth: u32 = args
        .next()
        .map(|s| s.parse().unwrap_or(5))
        .unwrap_or(5);

    let cases = match read_suite(&path) {
        Ok(cases) => cases,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let results = match run_suite(&cases, max_depth) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut failures = 0usize;
    for result in &results {
        println!("{result}");
        if !result.passed() {
            failures += 1;
        }
    }

    println!("{} case/depth checks, {} failed", results.len(), failures);

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
