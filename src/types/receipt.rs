//! Confirmation of an accepted deposit or withdrawal

use crate::types::money::{format_major_units, MinorUnits};
use std::fmt;

/// Which way money moved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Deposited,
    Withdrawn,
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Movement::Deposited => write!(f, "deposited"),
            Movement::Withdrawn => write!(f, "withdrawn"),
        }
    }
}

/// Outcome of an accepted account operation
///
/// Displays as the message returned to callers, e.g.
/// `100.00 deposited. Current balance: 100.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub movement: Movement,

    /// Amount moved, in minor units
    pub amount: MinorUnits,

    /// Balance after the operation, in minor units
    pub balance: MinorUnits,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}. Current balance: {}",
            format_major_units(self.amount),
            self.movement,
            format_major_units(self.balance)
        )
    }
}
