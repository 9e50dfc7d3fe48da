//! Budget entry model
//!
//! Tracks how much money a user allocated to one category for one calendar
//! month. At most one entry exists per (user, category, month).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, UserId};
use super::money::Money;
use super::month::BudgetMonth;

/// A monthly budget amount for one user and category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEntry {
    /// The user who configured the budget
    pub user_id: UserId,

    /// The category the budget applies to
    pub category_id: CategoryId,

    /// The calendar month the budget applies to
    pub month: BudgetMonth,

    /// Allocated amount, non-negative
    pub amount: Money,
}

impl BudgetEntry {
    /// Create a new budget entry
    pub fn new(user_id: UserId, category_id: CategoryId, month: BudgetMonth, amount: Money) -> Self {
        Self {
            user_id,
            category_id,
            month,
            amount,
        }
    }

    /// The uniqueness key: one entry per (user, category, month)
    pub fn key(&self) -> (UserId, CategoryId, BudgetMonth) {
        (self.user_id, self.category_id, self.month)
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.amount.is_negative() {
            return Err(BudgetValidationError::NegativeAmount);
        }
        Ok(())
    }
}

impl fmt::Display for BudgetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}: {}",
            self.user_id, self.month, self.category_id, self.amount
        )
    }
}

/// Validation errors for budget entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeAmount,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Budget amount cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
