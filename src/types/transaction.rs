//! Transaction record for the bank ledger
//!
//! A [`Transaction`] captures one ledger event: the amount credited or debited,
//! the balance right after the event, and when it happened. Records are built
//! once and never modified.

use crate::core::traits::LedgerEntry;
use crate::types::money::{to_major_units, MinorUnits};
use crate::types::LedgerError;
use chrono::NaiveDateTime;

/// Date format used on statements (day/month/year)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Delimiter placed between the fields of a statement row
pub const FIELD_SEPARATOR: &str = "|| ";

/// A single ledger event
///
/// The record itself is permissive about which of `credit` and `debit` are
/// present. [`Transaction::deposit`] and [`Transaction::withdrawal`] build the
/// shapes an account actually produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Amount credited, in minor units (deposits)
    credit: Option<MinorUnits>,

    /// Amount debited, in minor units (withdrawals)
    debit: Option<MinorUnits>,

    /// Account balance immediately after this event, in minor units
    balance: Option<MinorUnits>,

    /// Moment the record was created
    created_at: NaiveDateTime,
}

impl Transaction {
    /// Create a new transaction record
    ///
    /// # Arguments
    ///
    /// * `credit` - Amount credited; must be non-negative if present
    /// * `debit` - Amount debited; must be non-negative if present
    /// * `balance` - Balance after the event; any sign
    /// * `created_at` - Timestamp stamped on the record
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if `credit` or `debit` is negative.
    pub fn new(
        credit: Option<MinorUnits>,
        debit: Option<MinorUnits>,
        balance: Option<MinorUnits>,
        created_at: NaiveDateTime,
    ) -> Result<Self, LedgerError> {
        if let Some(credit) = credit.filter(|amount| *amount < 0) {
            return Err(LedgerError::invalid_value("credit", credit));
        }
        if let Some(debit) = debit.filter(|amount| *amount < 0) {
            return Err(LedgerError::invalid_value("debit", debit));
        }

        Ok(Transaction {
            credit,
            debit,
            balance,
            created_at,
        })
    }

    /// Record of a deposit
    pub fn deposit(
        credit: MinorUnits,
        balance: MinorUnits,
        created_at: NaiveDateTime,
    ) -> Result<Self, LedgerError> {
        Self::new(Some(credit), None, Some(balance), created_at)
    }

    /// Record of a withdrawal
    pub fn withdrawal(
        debit: MinorUnits,
        balance: MinorUnits,
        created_at: NaiveDateTime,
    ) -> Result<Self, LedgerError> {
        Self::new(None, Some(debit), Some(balance), created_at)
    }

    pub fn credit(&self) -> Option<MinorUnits> {
        self.credit
    }

    pub fn debit(&self) -> Option<MinorUnits> {
        self.debit
    }

    pub fn balance(&self) -> Option<MinorUnits> {
        self.balance
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Render the record as one statement row
    ///
    /// Fields are date, credit, debit, balance joined by [`FIELD_SEPARATOR`].
    /// Absent fields render empty. A field that cannot be converted renders
    /// inline as `Error: ...` so one bad record never breaks a statement.
    pub fn display(&self) -> String {
        let items = [
            self.created_at.format(DATE_FORMAT).to_string(),
            render(self.credit),
            render(self.debit),
            render(self.balance),
        ];
        items.join(FIELD_SEPARATOR).trim().to_string()
    }
}

fn render(item: Option<MinorUnits>) -> String {
    match item {
        Some(amount) => to_major_units(amount).unwrap_or_else(|e| format!("Error: {}", e)),
        None => String::new(),
    }
}

impl LedgerEntry for Transaction {
    fn record(
        credit: Option<MinorUnits>,
        debit: Option<MinorUnits>,
        balance: Option<MinorUnits>,
        created_at: NaiveDateTime,
    ) -> Result<Self, LedgerError> {
        Transaction::new(credit, debit, balance, created_at)
    }

    fn display(&self) -> String {
        Transaction::display(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    #[fixture]
    fn created_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[rstest]
    fn test_new_with_valid_data(created_at: NaiveDateTime) {
        let transaction = Transaction::new(Some(100), Some(50), Some(450), created_at).unwrap();

        assert_eq!(transaction.credit(), Some(100));
        assert_eq!(transaction.debit(), Some(50));
        assert_eq!(transaction.balance(), Some(450));
        assert_eq!(transaction.created_at(), created_at);
    }

    #[rstest]
    fn test_new_allows_no_amounts(created_at: NaiveDateTime) {
        let transaction = Transaction::new(None, None, None, created_at).unwrap();
        assert_eq!(transaction.display(), "16/10/2026|| || ||");
    }

    #[rstest]
    #[case::negative_credit(Some(-100), None, "credit")]
    #[case::negative_debit(None, Some(-100), "debit")]
    fn test_new_rejects_negative_amounts(
        created_at: NaiveDateTime,
        #[case] credit: Option<MinorUnits>,
        #[case] debit: Option<MinorUnits>,
        #[case] field: &str,
    ) {
        let result = Transaction::new(credit, debit, Some(0), created_at);
        match result {
            Err(LedgerError::InvalidValue { field: actual, .. }) => assert_eq!(actual, field),
            other => panic!("Expected InvalidValue for {}, got {:?}", field, other),
        }
    }

    #[rstest]
    fn test_new_allows_negative_balance(created_at: NaiveDateTime) {
        assert!(Transaction::new(None, None, Some(-1), created_at).is_ok());
    }

    #[rstest]
    fn test_display_deposit(created_at: NaiveDateTime) {
        let transaction = Transaction::deposit(10000, 10000, created_at).unwrap();
        assert_eq!(transaction.display(), "16/10/2026|| 100.00|| || 100.00");
    }

    #[rstest]
    fn test_display_withdrawal(created_at: NaiveDateTime) {
        let transaction = Transaction::withdrawal(3000, 7000, created_at).unwrap();
        assert_eq!(transaction.display(), "16/10/2026|| || 30.00|| 70.00");
    }

    #[rstest]
    fn test_display_trims_trailing_separator(created_at: NaiveDateTime) {
        let transaction = Transaction::new(Some(250), None, None, created_at).unwrap();
        assert_eq!(transaction.display(), "16/10/2026|| 2.50|| ||");
    }

    #[rstest]
    fn test_display_renders_conversion_failure_inline(created_at: NaiveDateTime) {
        let transaction = Transaction::new(None, Some(500), Some(-500), created_at).unwrap();
        assert_eq!(
            transaction.display(),
            "16/10/2026|| || 5.00|| Error: minor units must be a non-negative number, got -500"
        );
    }

    #[rstest]
    fn test_ledger_entry_record_matches_new(created_at: NaiveDateTime) {
        let via_trait = <Transaction as LedgerEntry>::record(Some(1), None, Some(1), created_at);
        let direct = Transaction::new(Some(1), None, Some(1), created_at);
        assert_eq!(via_trait, direct);
    }
}
