//! Ledger access layer
//!
//! The engine never performs I/O itself. Everything it needs from storage
//! arrives through the [`LedgerReader`] trait as already-aggregated
//! monetary facts; implementations are responsible for snapshot consistency
//! of what they hand over.

pub mod memory;

use chrono::NaiveDate;

use crate::error::SpendwiseResult;
use crate::models::{BudgetMonth, Money, MonthlyAggregate, UserId};

pub use memory::MemoryLedger;

/// Time window a population or peer statistic is computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatWindow {
    /// Everything ever recorded
    AllTime,

    /// One whole calendar month
    Month(BudgetMonth),

    /// From the 1st of the date's month through the date, inclusive
    MonthToDate(NaiveDate),
}

impl StatWindow {
    /// Whether a calendar day falls inside the window
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Self::AllTime => true,
            Self::Month(month) => month.contains(date),
            Self::MonthToDate(through) => {
                BudgetMonth::from_date(*through).contains(date) && date <= *through
            }
        }
    }
}

/// Read-only access to aggregated monetary facts
///
/// Backed by a storage/query layer in production; [`MemoryLedger`] provides
/// an in-process implementation with identical aggregate semantics. All
/// spend aggregates count non-excluded expenses only.
pub trait LedgerReader {
    /// Budgeted amount per category for one user and month
    fn month_budgets(&self, user_id: UserId, month: BudgetMonth)
        -> SpendwiseResult<MonthlyAggregate>;

    /// Spend per category in the month, strictly before `day`
    fn month_spend_before_day(
        &self,
        user_id: UserId,
        month: BudgetMonth,
        day: u32,
    ) -> SpendwiseResult<MonthlyAggregate>;

    /// Spend per category on a single calendar day
    fn day_spend(&self, user_id: UserId, date: NaiveDate) -> SpendwiseResult<MonthlyAggregate>;

    /// The user's configured minimum daily spend floor
    fn minimum_daily_floor(&self, user_id: UserId) -> SpendwiseResult<Money>;

    /// Average spend per category across all users in the window
    fn population_averages(&self, window: StatWindow) -> SpendwiseResult<MonthlyAggregate>;

    /// Total spend in the window by every user except `excluding`
    fn peer_spend_total(&self, excluding: UserId, window: StatWindow) -> SpendwiseResult<Money>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_all_time_window_contains_everything() {
        assert!(StatWindow::AllTime.contains(date(1999, 1, 1)));
        assert!(StatWindow::AllTime.contains(date(2030, 12, 31)));
    }

    #[test]
    fn test_month_window() {
        let window = StatWindow::Month(BudgetMonth::new(2025, 4));
        assert!(window.contains(date(2025, 4, 1)));
        assert!(window.contains(date(2025, 4, 30)));
        assert!(!window.contains(date(2025, 5, 1)));
    }

    #[test]
    fn test_month_to_date_window_is_inclusive() {
        let window = StatWindow::MonthToDate(date(2025, 4, 17));
        assert!(window.contains(date(2025, 4, 1)));
        assert!(window.contains(date(2025, 4, 17)));
        assert!(!window.contains(date(2025, 4, 18)));
        assert!(!window.contains(date(2025, 3, 31)));
    }
}
