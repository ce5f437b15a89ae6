//! Operations that can be replayed against an account

use crate::types::money::MajorAmount;

/// One step of an operation script
///
/// Amounts are carried exactly as read; numeric validation happens when the
/// account converts them.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Credit funds to the account
    Deposit(MajorAmount),

    /// Debit funds from the account (requires sufficient balance)
    Withdraw(MajorAmount),

    /// Print the statement at this point in the script
    Statement,
}
