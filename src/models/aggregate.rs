//! Category-keyed monetary aggregates
//!
//! A `MonthlyAggregate` is the shape every ledger query returns: the sum of
//! budget or expense amounts per category over some period. Keys are unique;
//! iteration runs in ascending category-id order, which is also catalog
//! order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ids::CategoryId;
use super::money::Money;

/// Per-category summed amounts over one period
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAggregate(BTreeMap<CategoryId, Money>);

impl MonthlyAggregate {
    /// Create an empty aggregate
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Set the amount for a category, replacing any previous value
    pub fn set(&mut self, category_id: CategoryId, amount: Money) {
        self.0.insert(category_id, amount);
    }

    /// Add an amount into a category's running sum
    pub fn accumulate(&mut self, category_id: CategoryId, amount: Money) {
        let entry = self.0.entry(category_id).or_insert_with(Money::zero);
        *entry += amount;
    }

    /// The summed amount for a category, if present
    pub fn get(&self, category_id: CategoryId) -> Option<Money> {
        self.0.get(&category_id).copied()
    }

    /// The summed amount for a category, zero when absent
    pub fn amount_or_zero(&self, category_id: CategoryId) -> Money {
        self.get(category_id).unwrap_or_else(Money::zero)
    }

    /// Whether the category has an entry
    pub fn contains(&self, category_id: CategoryId) -> bool {
        self.0.contains_key(&category_id)
    }

    /// Number of categories with an entry
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the aggregate has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in ascending category-id order
    pub fn iter(&self) -> impl Iterator<Item = (CategoryId, Money)> + '_ {
        self.0.iter().map(|(id, amount)| (*id, *amount))
    }

    /// Category ids in ascending order
    pub fn categories(&self) -> impl Iterator<Item = CategoryId> + '_ {
        self.0.keys().copied()
    }

    /// Sum of all entries
    pub fn total(&self) -> Money {
        self.0.values().copied().sum()
    }

    /// The first negative entry, if any; calculators reject such input
    pub fn first_negative(&self) -> Option<(CategoryId, Money)> {
        self.iter().find(|(_, amount)| amount.is_negative())
    }
}

impl FromIterator<(CategoryId, Money)> for MonthlyAggregate {
    fn from_iter<I: IntoIterator<Item = (CategoryId, Money)>>(iter: I) -> Self {
        let mut aggregate = Self::new();
        for (category_id, amount) in iter {
            aggregate.accumulate(category_id, amount);
        }
        aggregate
    }
}
