//! Daily allowance calculator
//!
//! Computes today's recommended spend per budgeted category from the
//! month's budget, the spend so far, and the days left in the month.
//! Spending in categories with no configured budget is not ignored: it is
//! charged evenly against every budgeted category, so overspending cannot
//! be disguised by skipping budget setup for a category.

use chrono::NaiveDate;

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{BudgetMonth, Money, MonthlyAggregate, Recommendation};

/// Recommend how much to spend today in each budgeted category
///
/// Only categories present in `monthly_budget` appear in the result. For
/// each, the remaining budget (minus the unbudgeted-spend penalty) is
/// spread over the days left in the month, today included, then clamped up
/// to `minimum_daily_floor`. The floor always wins, even when overspending
/// has driven the raw value negative.
pub fn allocate_today(
    monthly_budget: &MonthlyAggregate,
    spend_before_today: &MonthlyAggregate,
    minimum_daily_floor: Money,
    today: NaiveDate,
) -> SpendwiseResult<Recommendation> {
    if minimum_daily_floor.is_negative() {
        return Err(SpendwiseError::invalid_amount(
            "minimum daily floor",
            minimum_daily_floor,
        ));
    }
    if let Some((_, amount)) = monthly_budget.first_negative() {
        return Err(SpendwiseError::invalid_amount("monthly budget", amount));
    }
    if let Some((_, amount)) = spend_before_today.first_negative() {
        return Err(SpendwiseError::invalid_amount("monthly spend", amount));
    }
    if monthly_budget.is_empty() {
        return Err(SpendwiseError::NoBudgetConfigured);
    }

    // Inclusive of today, so at least 1 for any date in the month.
    let rest_days = BudgetMonth::from_date(today).remaining_days_from(today) as i64;

    let unbudgeted_spend: Money = spend_before_today
        .iter()
        .filter(|(category, _)| !monthly_budget.contains(*category))
        .map(|(_, amount)| amount)
        .sum();
    let penalty = unbudgeted_spend / monthly_budget.len() as i64;

    let mut recommendation = Recommendation::new();
    for (category, budget) in monthly_budget.iter() {
        let spent = spend_before_today.amount_or_zero(category);
        let raw = (budget - spent - penalty) / rest_days;
        recommendation.set(category, raw.clamp_min(minimum_daily_floor));
    }

    Ok(recommendation)
}
