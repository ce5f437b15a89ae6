//! Operation replay
//!
//! Drives a single [`Account`] through an operation script, writing each
//! answer the account gives, plus any statements, to an output writer.
//!
//! Rows that cannot be read are logged and skipped. Operations the account
//! refuses (bad amounts, overdrafts) are not errors here: their answer is
//! written like any other. Only I/O failures stop a replay.

use crate::core::{Account, Clock, Printer};
use crate::io::OperationReader;
use crate::types::{LedgerError, Operation, Receipt, Transaction};
use std::io::Write;
use std::path::Path;

/// What happened during a replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Deposits and withdrawals the account accepted
    pub applied: usize,
    /// Deposits and withdrawals the account refused
    pub rejected: usize,
    /// Rows that could not be read
    pub skipped: usize,
    /// Statements printed, including the closing one
    pub statements: usize,
}

/// Replay settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayOptions {
    /// Print a statement after the last operation
    pub closing_statement: bool,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        ReplayOptions {
            closing_statement: true,
        }
    }
}

/// Replay the operation script at `input_path`
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its header read, or if
/// writing to `output` fails.
pub fn replay_file<C: Clock>(
    input_path: &Path,
    clock: C,
    options: ReplayOptions,
    output: &mut dyn Write,
) -> Result<ReplaySummary, LedgerError> {
    let reader = OperationReader::open(input_path)?;
    replay(reader, clock, options, output)
}

/// Replay a sequence of operations against a fresh account
///
/// # Errors
///
/// Returns an error only if writing to `output` fails.
pub fn replay<I, C>(
    operations: I,
    clock: C,
    options: ReplayOptions,
    output: &mut dyn Write,
) -> Result<ReplaySummary, LedgerError>
where
    I: IntoIterator<Item = Result<Operation, LedgerError>>,
    C: Clock,
{
    let mut account: Account<Transaction, Printer<&mut dyn Write>, C> =
        Account::with_parts(Printer::new(output), clock);
    let mut summary = ReplaySummary::default();

    for operation in operations {
        let answer = match operation {
            Ok(Operation::Deposit(amount)) => account.try_deposit(amount),
            Ok(Operation::Withdraw(amount)) => account.try_withdraw(amount),
            Ok(Operation::Statement) => {
                account.statement();
                summary.statements += 1;
                continue;
            }
            Err(e) => {
                tracing::warn!(error = %e, "skipping operation");
                summary.skipped += 1;
                continue;
            }
        };

        let message = tally(answer, &mut summary);
        writeln!(account.printer_mut().get_mut(), "{}", message)?;
    }

    if options.closing_statement {
        account.statement();
        summary.statements += 1;
    }
    account.printer_mut().get_mut().flush()?;

    tracing::info!(
        applied = summary.applied,
        rejected = summary.rejected,
        skipped = summary.skipped,
        balance = account.balance(),
        "replay finished"
    );
    Ok(summary)
}

fn tally(answer: Result<Receipt, LedgerError>, summary: &mut ReplaySummary) -> String {
    match answer {
        Ok(receipt) => {
            summary.applied += 1;
            receipt.to_string()
        }
        Err(e) => {
            tracing::debug!(error = %e, "operation refused");
            summary.rejected += 1;
            e.user_message()
        }
    }
}
