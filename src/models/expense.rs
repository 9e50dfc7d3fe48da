//! Expense entry model
//!
//! One recorded spend event. Entries marked `excluded` stay visible to the
//! user but never count toward any aggregate the engine computes with.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, UserId};
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// The user who recorded the expense
    pub user_id: UserId,

    /// The category the expense was filed under
    pub category_id: CategoryId,

    /// When the expense happened
    pub recorded_at: DateTime<Utc>,

    /// Spent amount, non-negative
    pub amount: Money,

    /// Recorded for reference only; excluded from aggregate totals
    #[serde(default)]
    pub excluded: bool,
}

impl ExpenseEntry {
    /// Create a new expense entry, included in totals
    pub fn new(
        user_id: UserId,
        category_id: CategoryId,
        recorded_at: DateTime<Utc>,
        amount: Money,
    ) -> Self {
        Self {
            user_id,
            category_id,
            recorded_at,
            amount,
            excluded: false,
        }
    }

    /// Mark the entry as excluded from totals
    pub fn excluded(mut self) -> Self {
        self.excluded = true;
        self
    }

    /// Whether this entry participates in aggregate sums
    pub fn counts_toward_totals(&self) -> bool {
        !self.excluded
    }

    /// The UTC calendar day the expense falls on, used for windowing
    pub fn recorded_on(&self) -> NaiveDate {
        self.recorded_at.date_naive()
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }
        Ok(())
    }
}

impl fmt::Display for ExpenseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}: {}{}",
            self.user_id,
            self.recorded_on(),
            self.category_id,
            self.amount,
            if self.excluded { " (excluded)" } else { "" }
        )
    }
}

/// Validation errors for expense entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
