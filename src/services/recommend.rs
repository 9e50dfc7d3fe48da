//! Budget recommendation calculator
//!
//! Splits a total monthly budget across categories in proportion to
//! population-wide average spending. Pure: no I/O, no clock, no state.

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Money, MonthlyAggregate, Recommendation};

/// Propose a per-category budget split of `total_amount`
///
/// Each category present in `historical_averages` receives
/// `total_amount * average / sum_of_averages`, truncated. Truncation can
/// leave the shares short of the total, so the whole residual is assigned
/// to the last category in catalog order (the highest id present). The
/// returned recommendation therefore always sums exactly to `total_amount`.
pub fn recommend(
    total_amount: Money,
    historical_averages: &MonthlyAggregate,
) -> SpendwiseResult<Recommendation> {
    if total_amount.is_negative() {
        return Err(SpendwiseError::invalid_amount("total budget", total_amount));
    }
    if let Some((_, amount)) = historical_averages.first_negative() {
        return Err(SpendwiseError::invalid_amount("population average", amount));
    }
    if historical_averages.is_empty() {
        return Err(SpendwiseError::InsufficientData);
    }

    let pool = historical_averages.total().minor();
    if pool == 0 {
        // All-zero averages carry no population signal to proportion by.
        return Err(SpendwiseError::InsufficientData);
    }

    // Widened so total * average cannot overflow before the division.
    let mut recommendation = Recommendation::new();
    for (category, average) in historical_averages.iter() {
        let share = (total_amount.minor() as i128 * average.minor() as i128 / pool as i128) as i64;
        recommendation.set(category, Money::from_minor(share));
    }

    let residual = total_amount - recommendation.total();
    if let Some(last) = recommendation.last_category() {
        recommendation.bump(last, residual);
    }

    Ok(recommendation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryId;

    fn cat(raw: u64) -> CategoryId {
        CategoryId::new(raw)
    }

    fn averages(entries: &[(u64, i64)]) -> MonthlyAggregate {
        entries
            .iter()
            .map(|(id, amount)| (cat(*id), Money::from_minor(*amount)))
            .collect()
    }

    #[test]
    fn test_proportional_split() {
        let avgs = averages(&[(1, 600), (2, 300), (3, 100)]);
        let recommendation = recommend(Money::from_minor(1_000), &avgs).unwrap();

        assert_eq!(recommendation.get(cat(1)), Some(Money::from_minor(600)));
        assert_eq!(recommendation.get(cat(2)), Some(Money::from_minor(300)));
        assert_eq!(recommendation.get(cat(3)), Some(Money::from_minor(100)));
    }

    #[test]
    fn test_residual_goes_to_highest_category_id() {
        // Equal averages force truncation: 100/3 -> 33 each, residual 1.
        let avgs = averages(&[(1, 50), (2, 50), (3, 50)]);
        let recommendation = recommend(Money::from_minor(100), &avgs).unwrap();

        assert_eq!(recommendation.get(cat(1)), Some(Money::from_minor(33)));
        assert_eq!(recommendation.get(cat(2)), Some(Money::from_minor(33)));
        assert_eq!(recommendation.get(cat(3)), Some(Money::from_minor(34)));
    }

    #[test]
    fn test_residual_never_goes_to_largest_share() {
        // Category 1 has the largest share; the residual still lands on the
        // highest id.
        let avgs = averages(&[(1, 700), (2, 200), (3, 100)]);
        let recommendation = recommend(Money::from_minor(999), &avgs).unwrap();

        let share_1 = (999i64 * 700) / 1000;
        assert_eq!(recommendation.get(cat(1)), Some(Money::from_minor(share_1)));
        assert_eq!(recommendation.total().minor(), 999);
        let plain_share_3 = (999i64 * 100) / 1000;
        assert!(recommendation.get(cat(3)).unwrap().minor() >= plain_share_3);
    }

    #[test]
    fn test_sum_preservation() {
        let avgs = averages(&[(1, 123), (4, 77), (9, 5), (12, 991)]);
        for total in [0i64, 1, 99, 100, 12_345, 1_000_000_007] {
            let recommendation = recommend(Money::from_minor(total), &avgs).unwrap();
            assert_eq!(recommendation.total().minor(), total);
        }
    }

    #[test]
    fn test_zero_total_yields_all_zero() {
        let avgs = averages(&[(1, 50), (2, 50)]);
        let recommendation = recommend(Money::zero(), &avgs).unwrap();

        assert_eq!(recommendation.len(), 2);
        assert!(recommendation.iter().all(|(_, amount)| amount.is_zero()));
    }

    #[test]
    fn test_empty_averages_is_insufficient_data() {
        let err = recommend(Money::from_minor(100), &MonthlyAggregate::new()).unwrap_err();
        assert!(err.is_insufficient_data());
    }

    #[test]
    fn test_all_zero_averages_is_insufficient_data() {
        let avgs = averages(&[(1, 0), (2, 0)]);
        let err = recommend(Money::from_minor(100), &avgs).unwrap_err();
        assert!(err.is_insufficient_data());
    }

    #[test]
    fn test_negative_inputs_are_rejected() {
        let avgs = averages(&[(1, 50)]);
        assert!(recommend(Money::from_minor(-1), &avgs)
            .unwrap_err()
            .is_invalid_amount());

        let bad = averages(&[(1, 50), (2, -50)]);
        assert!(recommend(Money::from_minor(100), &bad)
            .unwrap_err()
            .is_invalid_amount());
    }

    #[test]
    fn test_large_amounts_do_not_overflow() {
        let avgs = averages(&[(1, i64::MAX / 2), (2, i64::MAX / 2)]);
        let total = Money::from_minor(i64::MAX / 2);
        let recommendation = recommend(total, &avgs).unwrap();
        assert_eq!(recommendation.total(), total);
    }

    #[test]
    fn test_idempotence() {
        let avgs = averages(&[(1, 311), (5, 47), (11, 900)]);
        let first = recommend(Money::from_minor(77_777), &avgs).unwrap();
        let second = recommend(Money::from_minor(77_777), &avgs).unwrap();
        assert_eq!(first, second);
    }
}
