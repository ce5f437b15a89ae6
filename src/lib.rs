//! Bank Ledger Library
//! # Overview
//!
//! A single in-memory account that records deposits and withdrawals and prints
//! them as a statement.
//!
//! # Architecture
//!
//! - [`types`] - Money conversion, transaction records, receipts, errors
//! - [`core`] - The account and the capabilities it is built from:
//!   - [`core::account`] - Balance, history, deposit/withdraw/statement
//!   - [`core::printer`] - Statement rendering
//!   - [`core::clock`] - Time sources for record timestamps
//!   - [`core::traits`] - Substitution points for records, printers, clocks
//! - [`io`] - Reading operation scripts from CSV
//! - [`replay`] - Driving an account through an operation script
//! - [`cli`] - CLI arguments parsing
//!
//! # Money
//!
//! Amounts are stored as integer minor units (pence). Callers pass major units
//! (pounds); conversion floors to whole pence.
//!
//! # Answers
//!
//! Account operations answer with text rather than errors:
//!
//! - `"100.00 deposited. Current balance: 100.00"`
//! - `"30.00 withdrawn. Current balance: 70.00"`
//! - `"Invalid amount"` / `"Invalid amount: <reason>"`
//! - `"Insufficient funds"`
//!
//! ```
//! use bank_ledger::{Account, FixedClock, Printer};
//! use chrono::NaiveDate;
//!
//! let clock = FixedClock::on_date(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
//! let mut account: Account = Account::new();
//! assert_eq!(account.deposit(100), "100.00 deposited. Current balance: 100.00");
//!
//! let mut quiet = Account::<bank_ledger::Transaction, _, _>::with_parts(Printer::new(Vec::new()), clock);
//! assert_eq!(quiet.withdraw(5), "Insufficient funds");
//! ```

pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod replay;
pub mod types;

pub use crate::core::{
    Account, Clock, FixedClock, LedgerEntry, Printer, StatementPrinter, SystemClock,
};
pub use crate::replay::{replay, replay_file, ReplayOptions, ReplaySummary};
pub use crate::types::{
    to_major_units, to_minor_units, LedgerError, MajorAmount, MinorUnits, Operation, Receipt,
    Transaction,
};
