//! Recommendation output type
//!
//! Category-keyed suggested amounts, produced by the budget recommendation
//! and daily allowance calculators and consumed by presentation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ids::CategoryId;
use super::money::Money;

/// Per-category recommended amounts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation(BTreeMap<CategoryId, Money>);

impl Recommendation {
    /// Create an empty recommendation
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Set the recommended amount for a category
    pub fn set(&mut self, category_id: CategoryId, amount: Money) {
        self.0.insert(category_id, amount);
    }

    /// The recommended amount for a category, if present
    pub fn get(&self, category_id: CategoryId) -> Option<Money> {
        self.0.get(&category_id).copied()
    }

    /// Add a delta onto a category's recommended amount
    ///
    /// Used to attribute the rounding residual; the category must already
    /// be present, absent categories are ignored.
    pub fn bump(&mut self, category_id: CategoryId, delta: Money) {
        if let Some(amount) = self.0.get_mut(&category_id) {
            *amount += delta;
        }
    }

    /// Number of recommended categories
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the recommendation is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in ascending category-id order
    pub fn iter(&self) -> impl Iterator<Item = (CategoryId, Money)> + '_ {
        self.0.iter().map(|(id, amount)| (*id, *amount))
    }

    /// Sum of all recommended amounts
    pub fn total(&self) -> Money {
        self.0.values().copied().sum()
    }

    /// The highest category id present (last in catalog order)
    pub fn last_category(&self) -> Option<CategoryId> {
        self.0.keys().next_back().copied()
    }
}

impl FromIterator<(CategoryId, Money)> for Recommendation {
    fn from_iter<I: IntoIterator<Item = (CategoryId, Money)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(raw: u64) -> CategoryId {
        CategoryId::new(raw)
    }

    #[test]
    fn test_set_get_total() {
        let mut recommendation = Recommendation::new();
        recommendation.set(cat(1), Money::from_minor(33));
        recommendation.set(cat(2), Money::from_minor(34));

        assert_eq!(recommendation.get(cat(1)), Some(Money::from_minor(33)));
        assert_eq!(recommendation.total().minor(), 67);
        assert_eq!(recommendation.len(), 2);
    }

    #[test]
    fn test_bump_existing_category() {
        let mut recommendation = Recommendation::new();
        recommendation.set(cat(12), Money::from_minor(33));
        recommendation.bump(cat(12), Money::from_minor(1));
        assert_eq!(recommendation.get(cat(12)), Some(Money::from_minor(34)));
    }

    #[test]
    fn test_bump_absent_category_is_ignored() {
        let mut recommendation = Recommendation::new();
        recommendation.set(cat(1), Money::from_minor(10));
        recommendation.bump(cat(2), Money::from_minor(5));
        assert_eq!(recommendation.get(cat(2)), None);
        assert_eq!(recommendation.total().minor(), 10);
    }

    #[test]
    fn test_last_category() {
        assert_eq!(Recommendation::new().last_category(), None);

        let recommendation: Recommendation = [
            (cat(3), Money::zero()),
            (cat(11), Money::zero()),
            (cat(7), Money::zero()),
        ]
        .into_iter()
        .collect();
        assert_eq!(recommendation.last_category(), Some(cat(11)));
    }

    #[test]
    fn test_serialization() {
        let recommendation: Recommendation =
            [(cat(1), Money::from_minor(85))].into_iter().collect();
        let json = serde_json::to_string(&recommendation).unwrap();
        let deserialized: Recommendation = serde_json::from_str(&json).unwrap();
        assert_eq!(recommendation, deserialized);
    }
}
