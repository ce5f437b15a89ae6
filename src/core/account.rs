//! Account management module
//!
//! This module provides the [`Account`] which owns a balance and the history of
//! every accepted deposit and withdrawal.
//!
//! The Account is responsible for:
//! - Converting caller amounts to minor units
//! - Keeping the balance non-negative (overdrafts are rejected)
//! - Appending one record per accepted operation
//! - Rendering its history, newest first, through a statement printer
//!
//! `deposit` and `withdraw` always answer with a message. Validation failures
//! are turned into text (`"Invalid amount..."`, `"Insufficient funds"`) and
//! never escape as errors; `try_deposit` and `try_withdraw` expose the typed
//! results underneath.

use crate::core::clock::SystemClock;
use crate::core::printer::Printer;
use crate::core::traits::{Clock, LedgerEntry, StatementPrinter};
use crate::types::{
    to_minor_units, LedgerError, MajorAmount, MinorUnits, Movement, Receipt, Transaction,
};
use std::io::Stdout;

/// A single in-memory account
///
/// Generic over the record type `T`, the statement printer `P`, and the clock
/// `C`. The defaults print to stdout and stamp records with local time.
#[derive(Debug)]
pub struct Account<T = Transaction, P = Printer<Stdout>, C = SystemClock> {
    /// Current balance in minor units; never negative
    balance: MinorUnits,

    /// Accepted operations, oldest first
    history: Vec<T>,

    printer: P,
    clock: C,
}

impl Account {
    /// Create an account with zero balance that prints to stdout
    pub fn new() -> Self {
        Account::with_parts(Printer::stdout(), SystemClock)
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P, C> Account<T, P, C>
where
    T: LedgerEntry,
    P: StatementPrinter,
    C: Clock,
{
    /// Create an empty account from explicit capabilities
    ///
    /// # Arguments
    ///
    /// * `printer` - Receives rendered statements
    /// * `clock` - Stamps each new record
    pub fn with_parts(printer: P, clock: C) -> Self {
        Account {
            balance: 0,
            history: Vec::new(),
            printer,
            clock,
        }
    }

    /// Current balance in minor units
    pub fn balance(&self) -> MinorUnits {
        self.balance
    }

    /// Records of accepted operations, oldest first
    pub fn history(&self) -> &[T] {
        &self.history
    }

    pub fn printer(&self) -> &P {
        &self.printer
    }

    pub fn printer_mut(&mut self) -> &mut P {
        &mut self.printer
    }

    /// Deposit an amount given in major units
    ///
    /// Returns `"<amount> deposited. Current balance: <balance>"` on success,
    /// or `"Invalid amount: <reason>"` if the amount cannot be accepted.
    pub fn deposit(&mut self, amount: impl Into<MajorAmount>) -> String {
        let amount = amount.into();
        match self.try_deposit(amount.clone()) {
            Ok(receipt) => receipt.to_string(),
            Err(e) => {
                tracing::warn!(%amount, error = %e, "deposit rejected");
                e.user_message()
            }
        }
    }

    /// Deposit an amount given in major units, returning a typed result
    ///
    /// # Errors
    ///
    /// - `InvalidType` / `InvalidValue` if the amount does not convert
    /// - `ArithmeticOverflow` if the balance would overflow
    /// - Any error the record type raises while being built
    ///
    /// The account is unchanged when an error is returned.
    pub fn try_deposit(&mut self, amount: impl Into<MajorAmount>) -> Result<Receipt, LedgerError> {
        let credit = to_minor_units(amount)?;

        let new_balance = self
            .balance
            .checked_add(credit)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit"))?;

        let record = T::record(Some(credit), None, Some(new_balance), self.clock.now())?;
        self.commit(record, new_balance);

        tracing::debug!(credit, balance = new_balance, "deposit recorded");
        Ok(Receipt {
            movement: Movement::Deposited,
            amount: credit,
            balance: new_balance,
        })
    }

    /// Withdraw an amount given in major units
    ///
    /// Returns `"<amount> withdrawn. Current balance: <balance>"` on success,
    /// `"Invalid amount"` for zero or negative amounts, `"Invalid amount: <reason>"`
    /// for amounts that do not convert, or `"Insufficient funds"`.
    pub fn withdraw(&mut self, amount: impl Into<MajorAmount>) -> String {
        let amount = amount.into();
        match self.try_withdraw(amount.clone()) {
            Ok(receipt) => receipt.to_string(),
            Err(e) => {
                tracing::warn!(%amount, error = %e, "withdrawal rejected");
                e.user_message()
            }
        }
    }

    /// Withdraw an amount given in major units, returning a typed result
    ///
    /// The sign check runs on the amount as given, before conversion; an
    /// amount that is not numeric skips it and fails conversion instead.
    ///
    /// # Errors
    ///
    /// - `NonPositiveAmount` if the amount is zero or negative
    /// - `InvalidType` / `InvalidValue` if the amount does not convert
    /// - `ArithmeticOverflow` if the amount is too large to represent
    /// - `InsufficientFunds` if the amount exceeds the balance
    /// - Any error the record type raises while being built
    ///
    /// The account is unchanged when an error is returned.
    pub fn try_withdraw(&mut self, amount: impl Into<MajorAmount>) -> Result<Receipt, LedgerError> {
        let amount = amount.into();
        if amount.is_positive() == Some(false) {
            return Err(LedgerError::NonPositiveAmount);
        }

        let debit = to_minor_units(amount)?;
        if debit > self.balance {
            return Err(LedgerError::insufficient_funds(self.balance, debit));
        }

        let new_balance = self.balance - debit;
        let record = T::record(None, Some(debit), Some(new_balance), self.clock.now())?;
        self.commit(record, new_balance);

        tracing::debug!(debit, balance = new_balance, "withdrawal recorded");
        Ok(Receipt {
            movement: Movement::Withdrawn,
            amount: debit,
            balance: new_balance,
        })
    }

    /// Rows of the statement, newest first
    pub fn statement_rows(&self) -> Vec<String> {
        self.history.iter().rev().map(T::display).collect()
    }

    /// Print the statement through the account's printer
    pub fn statement(&mut self) {
        let rows = self.statement_rows();
        tracing::debug!(rows = rows.len(), "printing statement");
        self.printer.print_statement(&rows);
    }

    fn commit(&mut self, record: T, new_balance: MinorUnits) {
        self.history.push(record);
        self.balance = new_balance;
    }
}
