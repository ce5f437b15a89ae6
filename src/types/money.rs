//! Currency conversion between major and minor units
//!
//! Balances and transaction amounts are stored as integer minor units (pence).
//! Everything a person types or reads is in major units (pounds) with two
//! decimal places. The functions here are pure and stateless.
//!
//! Conversion to minor units truncates: `12.345` becomes `1234`, not `1235`.

use crate::types::LedgerError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Amount in minor currency units (pence)
pub type MinorUnits = i64;

/// An amount in major units as supplied by a caller
///
/// Callers may hand over exact decimals, integers, binary floats, or raw text.
/// Whether the value is actually numeric is decided during conversion, so a
/// bad value surfaces as [`LedgerError::InvalidType`] rather than a panic.
#[derive(Debug, Clone, PartialEq)]
pub enum MajorAmount {
    Exact(Decimal),
    Float(f64),
    Text(String),
}

impl MajorAmount {
    /// Interpret the amount as an exact decimal
    ///
    /// # Errors
    ///
    /// - `InvalidType` for text that does not parse as a decimal number and
    ///   for NaN or infinite floats
    /// - `InvalidValue` for a finite negative float beyond the decimal range
    /// - `ArithmeticOverflow` for a finite positive float beyond the decimal range
    pub fn to_decimal(&self) -> Result<Decimal, LedgerError> {
        match self {
            MajorAmount::Exact(value) => Ok(*value),
            MajorAmount::Float(value) if !value.is_finite() => {
                Err(LedgerError::invalid_type("amount", value))
            }
            MajorAmount::Float(value) => Decimal::try_from(*value).map_err(|_| {
                if *value < 0.0 {
                    LedgerError::invalid_value("amount", value)
                } else {
                    LedgerError::arithmetic_overflow("minor unit conversion")
                }
            }),
            MajorAmount::Text(text) => Decimal::from_str(text.trim())
                .map_err(|_| LedgerError::invalid_type("amount", text)),
        }
    }

    /// Whether the amount is strictly greater than zero
    ///
    /// `None` when the amount is not numeric at all.
    pub fn is_positive(&self) -> Option<bool> {
        match self {
            MajorAmount::Float(value) if value.is_nan() => None,
            MajorAmount::Float(value) => Some(*value > 0.0),
            _ => self.to_decimal().ok().map(|value| value > Decimal::ZERO),
        }
    }
}

impl fmt::Display for MajorAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MajorAmount::Exact(value) => write!(f, "{}", value),
            MajorAmount::Float(value) => write!(f, "{}", value),
            MajorAmount::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<Decimal> for MajorAmount {
    fn from(value: Decimal) -> Self {
        MajorAmount::Exact(value)
    }
}

impl From<f64> for MajorAmount {
    fn from(value: f64) -> Self {
        MajorAmount::Float(value)
    }
}

impl From<i32> for MajorAmount {
    fn from(value: i32) -> Self {
        MajorAmount::Exact(Decimal::from(value))
    }
}

impl From<i64> for MajorAmount {
    fn from(value: i64) -> Self {
        MajorAmount::Exact(Decimal::from(value))
    }
}

impl From<u32> for MajorAmount {
    fn from(value: u32) -> Self {
        MajorAmount::Exact(Decimal::from(value))
    }
}

impl From<u64> for MajorAmount {
    fn from(value: u64) -> Self {
        MajorAmount::Exact(Decimal::from(value))
    }
}

impl From<&str> for MajorAmount {
    fn from(value: &str) -> Self {
        MajorAmount::Text(value.to_string())
    }
}

impl From<String> for MajorAmount {
    fn from(value: String) -> Self {
        MajorAmount::Text(value)
    }
}

/// Convert a major-unit amount to minor units
///
/// Multiplies by 100 and floors the result, dropping sub-cent precision.
///
/// # Errors
///
/// - `InvalidType` if the amount is not numeric
/// - `InvalidValue` if the amount is negative
/// - `ArithmeticOverflow` if the result does not fit in [`MinorUnits`]
pub fn to_minor_units(amount: impl Into<MajorAmount>) -> Result<MinorUnits, LedgerError> {
    let value = amount.into().to_decimal()?;
    if value < Decimal::ZERO {
        return Err(LedgerError::invalid_value("amount", value));
    }

    value
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|scaled| scaled.floor())
        .and_then(|scaled| scaled.to_i64())
        .ok_or_else(|| LedgerError::arithmetic_overflow("minor unit conversion"))
}

/// Convert minor units to a major-unit string with two decimal places
///
/// # Errors
///
/// Returns `InvalidValue` if the amount is negative.
pub fn to_major_units(amount: MinorUnits) -> Result<String, LedgerError> {
    if amount < 0 {
        return Err(LedgerError::invalid_value("minor units", amount));
    }
    Ok(format_major_units(amount))
}

/// Format any minor-unit amount, sign included, with two decimal places
pub fn format_major_units(amount: MinorUnits) -> String {
    format!("{:.2}", Decimal::new(amount, 2))
}
