//! Core ledger module
//!
//! This module contains the account and the capabilities it is built from:
//! - `traits` - Trait abstractions for records, statement output, and time
//! - `account` - Balance and history, deposit/withdraw/statement
//! - `printer` - Statement rendering to an output channel
//! - `clock` - Wall clock and fixed clock

pub mod account;
pub mod clock;
pub mod printer;
pub mod traits;

pub use account::Account;
pub use clock::{FixedClock, SystemClock};
pub use printer::{render_statement, Printer, NO_TRANSACTIONS_NOTICE, STATEMENT_HEADER};
pub use traits::{Clock, LedgerEntry, StatementPrinter};
