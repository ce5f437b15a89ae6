use crate::replay::ReplayOptions;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Replay deposits and withdrawals against an in-memory account
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Replay deposits and withdrawals against an in-memory account and print its statement", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing operations
    #[arg(value_name = "INPUT", help = "Path to the CSV file of operations (columns: operation,amount)")]
    pub input_file: PathBuf,

    /// Date stamped on every record instead of today's
    #[arg(
        long = "date",
        value_name = "YYYY-MM-DD",
        help = "Stamp every record with this date instead of the local clock"
    )]
    pub date: Option<NaiveDate>,

    /// Skip the statement printed after the last operation
    #[arg(long = "no-statement", help = "Do not print a statement after the last operation")]
    pub no_statement: bool,
}

impl CliArgs {
    /// Create ReplayOptions from CLI arguments
    pub fn to_replay_options(&self) -> ReplayOptions {
        ReplayOptions {
            closing_statement: !self.no_statement,
        }
    }
}
