//! Clock implementations

use crate::core::traits::Clock;
use chrono::{Local, NaiveDate, NaiveDateTime};

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that always reports the same moment
///
/// Used for deterministic statements (tests, `--date` on the command line).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        FixedClock(at)
    }

    /// Midnight at the start of `date`
    pub fn on_date(date: NaiveDate) -> Self {
        FixedClock(date.and_time(chrono::NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_constant() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let clock = FixedClock::on_date(date);

        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().date(), date);
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
