//! CSV format handling for operation scripts
//!
//! An operation script has the columns `operation,amount`:
//!
//! ```text
//! operation,amount
//! deposit,100
//! withdraw,30.50
//! statement,
//! ```
//!
//! All functions here are pure (no I/O).

use crate::types::{LedgerError, MajorAmount, Operation};
use serde::Deserialize;

/// CSV record structure for deserialization
///
/// The amount stays textual: numeric validation belongs to the money layer,
/// so `deposit,ten` becomes an `Invalid amount` answer rather than a skipped row.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub operation: String,
    pub amount: Option<String>,
}

/// Convert a CsvRecord to an Operation
///
/// Operation names are case-insensitive; `withdrawal` is accepted as an alias
/// for `withdraw`. Any amount given on a `statement` row is ignored.
///
/// # Errors
///
/// - `InvalidOperation` for an unknown operation name
/// - `MissingAmount` for a deposit or withdrawal with an empty amount
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<Operation, LedgerError> {
    let name = csv_record.operation.trim().to_lowercase();
    let amount = csv_record
        .amount
        .filter(|amount| !amount.trim().is_empty())
        .map(MajorAmount::from);

    match name.as_str() {
        "deposit" => amount
            .map(Operation::Deposit)
            .ok_or_else(|| LedgerError::missing_amount("deposit")),
        "withdraw" | "withdrawal" => amount
            .map(Operation::Withdraw)
            .ok_or_else(|| LedgerError::missing_amount("withdraw")),
        "statement" => Ok(Operation::Statement),
        _ => Err(LedgerError::invalid_operation(&csv_record.operation)),
    }
}
