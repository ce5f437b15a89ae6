//! Bank Ledger CLI
//!
//! Replays a CSV script of account operations and prints every answer plus the
//! closing statement to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- operations.csv
//! cargo run -- --date 2026-10-16 operations.csv
//! cargo run -- --no-statement operations.csv
//! RUST_LOG=debug cargo run -- operations.csv
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, output not writable, etc.)

use bank_ledger::{cli, logging, replay_file, FixedClock, SystemClock};
use std::process;

fn main() {
    logging::init();

    let args = cli::parse_args();
    let options = args.to_replay_options();

    let mut output = std::io::stdout();
    let result = match args.date {
        Some(date) => replay_file(&args.input_file, FixedClock::on_date(date), options, &mut output),
        None => replay_file(&args.input_file, SystemClock, options, &mut output),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "replay failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
