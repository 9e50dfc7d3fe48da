//! In-memory ledger
//!
//! Holds budget and expense rows in process and computes the same
//! aggregates a storage-backed ledger would. Used by the test suites and by
//! callers that assemble snapshots themselves.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{
    BudgetEntry, BudgetMonth, CategoryId, ExpenseEntry, Money, MonthlyAggregate, UserId,
};

use super::{LedgerReader, StatWindow};

/// An in-memory [`LedgerReader`] implementation
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    // Keyed storage enforces the one-entry-per-(user, category, month)
    // invariant; upserts replace.
    budgets: BTreeMap<(UserId, CategoryId, BudgetMonth), Money>,
    expenses: Vec<ExpenseEntry>,
    floors: BTreeMap<UserId, Money>,
}

impl MemoryLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a budget entry
    pub fn upsert_budget(&mut self, entry: BudgetEntry) -> SpendwiseResult<()> {
        entry
            .validate()
            .map_err(|_| SpendwiseError::invalid_amount("budget entry", entry.amount))?;
        self.budgets.insert(entry.key(), entry.amount);
        Ok(())
    }

    /// Record an expense
    pub fn record_expense(&mut self, entry: ExpenseEntry) -> SpendwiseResult<()> {
        entry
            .validate()
            .map_err(|_| SpendwiseError::invalid_amount("expense entry", entry.amount))?;
        self.expenses.push(entry);
        Ok(())
    }

    /// Set a user's minimum daily spend floor
    pub fn set_minimum_daily_floor(&mut self, user_id: UserId, floor: Money) -> SpendwiseResult<()> {
        if floor.is_negative() {
            return Err(SpendwiseError::invalid_amount("minimum daily floor", floor));
        }
        self.floors.insert(user_id, floor);
        Ok(())
    }

    /// Non-excluded expenses inside a window, all users
    fn countable_expenses<'a>(
        &'a self,
        window: StatWindow,
    ) -> impl Iterator<Item = &'a ExpenseEntry> {
        self.expenses
            .iter()
            .filter(move |e| e.counts_toward_totals() && window.contains(e.recorded_on()))
    }
}

impl LedgerReader for MemoryLedger {
    fn month_budgets(
        &self,
        user_id: UserId,
        month: BudgetMonth,
    ) -> SpendwiseResult<MonthlyAggregate> {
        let mut aggregate = MonthlyAggregate::new();
        for ((user, category, entry_month), amount) in &self.budgets {
            if *user == user_id && *entry_month == month {
                aggregate.set(*category, *amount);
            }
        }
        Ok(aggregate)
    }

    fn month_spend_before_day(
        &self,
        user_id: UserId,
        month: BudgetMonth,
        day: u32,
    ) -> SpendwiseResult<MonthlyAggregate> {
        let mut aggregate = MonthlyAggregate::new();
        for expense in self.countable_expenses(StatWindow::Month(month)) {
            if expense.user_id == user_id && expense.recorded_on().day() < day {
                aggregate.accumulate(expense.category_id, expense.amount);
            }
        }
        Ok(aggregate)
    }

    fn day_spend(&self, user_id: UserId, date: NaiveDate) -> SpendwiseResult<MonthlyAggregate> {
        let mut aggregate = MonthlyAggregate::new();
        for expense in self
            .expenses
            .iter()
            .filter(|e| e.counts_toward_totals() && e.recorded_on() == date)
        {
            if expense.user_id == user_id {
                aggregate.accumulate(expense.category_id, expense.amount);
            }
        }
        Ok(aggregate)
    }

    fn minimum_daily_floor(&self, user_id: UserId) -> SpendwiseResult<Money> {
        Ok(self.floors.get(&user_id).copied().unwrap_or_else(Money::zero))
    }

    fn population_averages(&self, window: StatWindow) -> SpendwiseResult<MonthlyAggregate> {
        let mut totals = MonthlyAggregate::new();
        let mut spenders: BTreeSet<UserId> = BTreeSet::new();
        for expense in self.countable_expenses(window) {
            totals.accumulate(expense.category_id, expense.amount);
            spenders.insert(expense.user_id);
        }

        let population = spenders.len() as i64;
        if population == 0 {
            return Ok(MonthlyAggregate::new());
        }

        let mut averages = MonthlyAggregate::new();
        for (category, total) in totals.iter() {
            averages.set(category, total / population);
        }
        Ok(averages)
    }

    fn peer_spend_total(&self, excluding: UserId, window: StatWindow) -> SpendwiseResult<Money> {
        Ok(self
            .countable_expenses(window)
            .filter(|e| e.user_id != excluding)
            .map(|e| e.amount)
            .sum())
    }
}
