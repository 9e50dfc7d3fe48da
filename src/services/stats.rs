//! Comparative statistics calculator
//!
//! Compares a current expense aggregate against a reference aggregate and
//! expresses the result as a percentage per category. "No baseline" is a
//! distinct outcome from 0%: a category the reference period never saw
//! must not read the same as a category with a verified zero spend.

use std::collections::BTreeMap;

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{CategoryId, Money, MonthlyAggregate, RateResult};

/// The three-way rate branch for one pair of amounts
///
/// Absent amounts are passed as zero; both zero-reference and
/// absent-reference mean there is no baseline.
fn rate_between(current: Money, reference: Money) -> RateResult {
    if reference.is_zero() {
        RateResult::NoBaseline
    } else if current.is_zero() {
        RateResult::Zero
    } else {
        RateResult::Rate(current.minor() as f64 / reference.minor() as f64 * 100.0)
    }
}

/// Compare two aggregates category by category
///
/// The result covers the union of both key sets, so new categories (present
/// only in `current`) report `NoBaseline` and abandoned ones (present only
/// in `reference`) report `Zero`.
pub fn compare_rate(
    current: &MonthlyAggregate,
    reference: &MonthlyAggregate,
) -> SpendwiseResult<BTreeMap<CategoryId, RateResult>> {
    if let Some((_, amount)) = current.first_negative() {
        return Err(SpendwiseError::invalid_amount("current aggregate", amount));
    }
    if let Some((_, amount)) = reference.first_negative() {
        return Err(SpendwiseError::invalid_amount(
            "reference aggregate",
            amount,
        ));
    }

    let mut categories: Vec<CategoryId> = current.categories().collect();
    categories.extend(reference.categories());
    categories.sort_unstable();
    categories.dedup();

    Ok(categories
        .into_iter()
        .map(|category| {
            (
                category,
                rate_between(
                    current.amount_or_zero(category),
                    reference.amount_or_zero(category),
                ),
            )
        })
        .collect())
}

/// Compare two total amounts
///
/// Same branch rules as the per-category comparison; used for peer
/// statistics where only aggregate totals are available.
pub fn compare_totals(current: Money, reference: Money) -> SpendwiseResult<RateResult> {
    if current.is_negative() {
        return Err(SpendwiseError::invalid_amount("current total", current));
    }
    if reference.is_negative() {
        return Err(SpendwiseError::invalid_amount("reference total", reference));
    }
    Ok(rate_between(current, reference))
}
