//! Error types for the bank ledger
//!
//! This module defines every error that can occur while converting money,
//! building transaction records, operating on an account, or replaying an
//! operation file.
//!
//! # Error Categories
//!
//! - **Validation Errors**: non-numeric input (`InvalidType`), out-of-range
//!   input (`InvalidValue`), arithmetic overflow
//! - **Account Errors**: non-positive withdrawal, insufficient funds
//! - **Input Errors**: unknown operations, missing amounts, malformed CSV
//! - **File I/O Errors**: file not found, permission denied, etc.
//!
//! Account operations never let these escape as errors from `deposit` or
//! `withdraw`; they are rendered through [`LedgerError::user_message`].

use thiserror::Error;

/// Main error type for the ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// A numeric field received something that is not a number
    ///
    /// Raised for unparseable text and for non-finite floats.
    #[error("{field} must be a number, got '{input}'")]
    InvalidType {
        /// Name of the field being validated
        field: String,
        /// The offending input, as text
        input: String,
    },

    /// A numeric field is outside its permitted range (typically negative)
    #[error("{field} must be a non-negative number, got {value}")]
    InvalidValue {
        /// Name of the field being validated
        field: String,
        /// The offending value, as text
        value: String,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected and the account is left untouched.
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// Withdrawal requested for zero or a negative amount
    #[error("Invalid amount")]
    NonPositiveAmount,

    /// Withdrawal exceeds the current balance
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Balance in minor units at the time of the request
        balance: i64,
        /// Requested withdrawal in minor units
        requested: i64,
    },

    /// Unknown operation name in replay input
    #[error("Invalid operation '{operation}'")]
    InvalidOperation {
        /// The operation name as read
        operation: String,
    },

    /// Deposit or withdrawal row without an amount
    #[error("{operation} requires an amount")]
    MissingAmount {
        /// Operation that requires an amount
        operation: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Recoverable during replay: the row is skipped.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create an InvalidType error
    pub fn invalid_type(field: &str, input: impl ToString) -> Self {
        LedgerError::InvalidType {
            field: field.to_string(),
            input: input.to_string(),
        }
    }

    /// Create an InvalidValue error
    pub fn invalid_value(field: &str, value: impl ToString) -> Self {
        LedgerError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(balance: i64, requested: i64) -> Self {
        LedgerError::InsufficientFunds { balance, requested }
    }

    /// Create an InvalidOperation error
    pub fn invalid_operation(operation: &str) -> Self {
        LedgerError::InvalidOperation {
            operation: operation.to_string(),
        }
    }

    /// Create a MissingAmount error
    pub fn missing_amount(operation: &str) -> Self {
        LedgerError::MissingAmount {
            operation: operation.to_string(),
        }
    }

    /// Message an account hands back to its caller for this failure
    ///
    /// Callers detect failure by substring: `"Invalid amount"` for anything
    /// wrong with the amount itself, `"Insufficient funds"` for overdrafts.
    pub fn user_message(&self) -> String {
        match self {
            LedgerError::NonPositiveAmount => "Invalid amount".to_string(),
            LedgerError::InsufficientFunds { .. } => "Insufficient funds".to_string(),
            other => format!("Invalid amount: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::invalid_type(
        LedgerError::InvalidType { field: "amount".to_string(), input: "abc".to_string() },
        "amount must be a number, got 'abc'"
    )]
    #[case::invalid_value(
        LedgerError::InvalidValue { field: "credit".to_string(), value: "-100".to_string() },
        "credit must be a non-negative number, got -100"
    )]
    #[case::arithmetic_overflow(
        LedgerError::ArithmeticOverflow { operation: "deposit".to_string() },
        "Arithmetic overflow in deposit"
    )]
    #[case::non_positive_amount(LedgerError::NonPositiveAmount, "Invalid amount")]
    #[case::insufficient_funds(
        LedgerError::InsufficientFunds { balance: 7000, requested: 100000 },
        "Insufficient funds: balance 7000, requested 100000"
    )]
    #[case::missing_amount(
        LedgerError::MissingAmount { operation: "deposit".to_string() },
        "deposit requires an amount"
    )]
    #[case::parse_error_with_line(
        LedgerError::ParseError { line: Some(3), message: "bad row".to_string() },
        "CSV parse error at line 3: bad row"
    )]
    #[case::parse_error_without_line(
        LedgerError::ParseError { line: None, message: "bad row".to_string() },
        "CSV parse error: bad row"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::non_positive(LedgerError::NonPositiveAmount, "Invalid amount")]
    #[case::insufficient(LedgerError::insufficient_funds(0, 100), "Insufficient funds")]
    #[case::invalid_value(
        LedgerError::invalid_value("amount", -1),
        "Invalid amount: amount must be a non-negative number, got -1"
    )]
    #[case::invalid_type(
        LedgerError::invalid_type("amount", "ten"),
        "Invalid amount: amount must be a number, got 'ten'"
    )]
    fn test_user_message(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.user_message(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
