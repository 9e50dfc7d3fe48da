//! Advisor service
//!
//! The orchestration façade callers talk to: fetches aggregates from a
//! [`LedgerReader`] and forwards them to the pure calculators. Holds no
//! state of its own and performs no computation beyond catalog name
//! resolution, so every operation is as repeatable as the snapshot the
//! ledger hands over.

use chrono::{Datelike, Duration, NaiveDate};
use tracing::debug;

use crate::error::SpendwiseResult;
use crate::ledger::{LedgerReader, StatWindow};
use crate::models::{
    BudgetCategory, BudgetMonth, CategoryId, CategoryRate, Money, RateResult, Recommendation,
    UserId,
};
use crate::services::{allowance, recommend, stats};

/// Stateless façade over a ledger for the engine's read operations
pub struct Advisor<'a> {
    ledger: &'a dyn LedgerReader,
}

impl<'a> Advisor<'a> {
    /// Create a new advisor over a ledger
    pub fn new(ledger: &'a dyn LedgerReader) -> Self {
        Self { ledger }
    }

    /// Propose a per-category split of `total_amount` from population
    /// averages over `window`
    pub fn recommend_budget(
        &self,
        total_amount: Money,
        window: StatWindow,
    ) -> SpendwiseResult<Recommendation> {
        debug!(total = %total_amount, "building budget recommendation");
        let averages = self.ledger.population_averages(window)?;
        recommend::recommend(total_amount, &averages)
    }

    /// Recommend how much the user can spend today per budgeted category
    pub fn today_allowance(
        &self,
        user_id: UserId,
        today: NaiveDate,
    ) -> SpendwiseResult<Recommendation> {
        debug!(user = %user_id, %today, "computing today's allowance");
        let month = BudgetMonth::from_date(today);
        let budgets = self.ledger.month_budgets(user_id, month)?;
        let spent = self
            .ledger
            .month_spend_before_day(user_id, month, today.day())?;
        let floor = self.ledger.minimum_daily_floor(user_id)?;
        allowance::allocate_today(&budgets, &spent, floor, today)
    }

    /// Per-category spending rates: this month so far against the same
    /// day window of the previous month
    pub fn monthly_spending_rates(
        &self,
        user_id: UserId,
        today: NaiveDate,
    ) -> SpendwiseResult<Vec<CategoryRate>> {
        let month = BudgetMonth::from_date(today);
        let current = self
            .ledger
            .month_spend_before_day(user_id, month, today.day())?;
        let reference = self
            .ledger
            .month_spend_before_day(user_id, month.prev(), today.day())?;
        Ok(named_rates(stats::compare_rate(&current, &reference)?))
    }

    /// Per-category spending rates: today against the same weekday one
    /// week earlier
    pub fn weekly_spending_rates(
        &self,
        user_id: UserId,
        today: NaiveDate,
    ) -> SpendwiseResult<Vec<CategoryRate>> {
        let current = self.ledger.day_spend(user_id, today)?;
        let reference = self.ledger.day_spend(user_id, today - Duration::days(7))?;
        Ok(named_rates(stats::compare_rate(&current, &reference)?))
    }

    /// The user's month-to-date spending as a percentage of the peer total
    pub fn peer_spending_rate(
        &self,
        user_id: UserId,
        today: NaiveDate,
    ) -> SpendwiseResult<RateResult> {
        debug!(user = %user_id, %today, "comparing spend against peers");
        let month = BudgetMonth::from_date(today);
        // Month-to-date runs through today, so the before-day cutoff is
        // tomorrow's day number.
        let mine = self
            .ledger
            .month_spend_before_day(user_id, month, today.day() + 1)?
            .total();
        let peers = self
            .ledger
            .peer_spend_total(user_id, StatWindow::MonthToDate(today))?;
        stats::compare_totals(mine, peers)
    }
}

/// Attach catalog display names to raw per-category rates
fn named_rates(
    rates: impl IntoIterator<Item = (CategoryId, RateResult)>,
) -> Vec<CategoryRate> {
    rates
        .into_iter()
        .map(|(category_id, rate)| CategoryRate {
            category_id,
            category_name: category_name(category_id),
            rate,
        })
        .collect()
}

/// Resolve a display name, falling back to the raw id for categories the
/// catalog does not know
fn category_name(category_id: CategoryId) -> String {
    match BudgetCategory::from_id(category_id) {
        Some(category) => category.name().to_string(),
        None => category_id.to_string(),
    }
}
