//! Types module
//!
//! Contains core data structures used throughout the ledger:
//! - `money`: Major/minor currency unit conversion
//! - `transaction`: The transaction record and its statement row
//! - `receipt`: Confirmation of an accepted deposit or withdrawal
//! - `operation`: Replayable account operations
//! - `error`: Error types for the ledger

pub mod error;
pub mod money;
pub mod operation;
pub mod receipt;
pub mod transaction;

pub use error::LedgerError;
pub use money::{format_major_units, to_major_units, to_minor_units, MajorAmount, MinorUnits};
pub use operation::Operation;
pub use receipt::{Movement, Receipt};
pub use transaction::Transaction;
