//! Core traits for ledger records, statement output, and time
//!
//! An [`Account`](crate::core::Account) depends on these capabilities rather
//! than on concrete types, so tests and embedders can substitute their own
//! record type, output channel, or clock.

use crate::types::{LedgerError, MinorUnits};
use chrono::NaiveDateTime;

/// A record an account appends to its history
pub trait LedgerEntry: Sized {
    /// Build a record for one ledger event
    ///
    /// # Errors
    ///
    /// Implementations reject values they consider invalid; the account then
    /// leaves its state unchanged.
    fn record(
        credit: Option<MinorUnits>,
        debit: Option<MinorUnits>,
        balance: Option<MinorUnits>,
        created_at: NaiveDateTime,
    ) -> Result<Self, LedgerError>;

    /// Render the record as one statement row
    fn display(&self) -> String;
}

/// Output channel for rendered statements
///
/// Printing is a presentation action with no result: implementations handle
/// their own failures.
pub trait StatementPrinter {
    /// Emit a statement for `rows`, which are ordered newest first
    fn print_statement(&mut self, rows: &[String]);
}

/// Source of the timestamp stamped on each record
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}
