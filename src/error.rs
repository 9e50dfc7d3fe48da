//! Custom error types for the spendwise engine
//!
//! This module defines the error taxonomy for the engine using thiserror
//! for ergonomic error definitions. All calculator errors are deterministic
//! given the same inputs; retries never help and belong to the ledger
//! implementations, not here.

use thiserror::Error;

use crate::models::Money;

/// The main error type for spendwise operations
#[derive(Error, Debug)]
pub enum SpendwiseError {
    /// No population statistics exist to proportion a budget from
    #[error("not enough spending history to recommend a budget")]
    InsufficientData,

    /// Daily allowance requested for a user/month with zero budgeted categories
    #[error("no budget configured for this month")]
    NoBudgetConfigured,

    /// Negative monetary input; indicates a bug in the caller or storage layer
    #[error("invalid amount for {context}: {amount}")]
    InvalidAmount {
        context: &'static str,
        amount: Money,
    },

    /// Failure reported by a ledger collaborator
    #[error("ledger error: {0}")]
    Ledger(String),
}

impl SpendwiseError {
    /// Create an "invalid amount" error for a named input
    pub fn invalid_amount(context: &'static str, amount: Money) -> Self {
        Self::InvalidAmount { context, amount }
    }

    /// Create a ledger error from any displayable cause
    pub fn ledger(cause: impl Into<String>) -> Self {
        Self::Ledger(cause.into())
    }

    /// Check if this is an "insufficient data" error
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData)
    }

    /// Check if this is a "no budget configured" error
    pub fn is_no_budget(&self) -> bool {
        matches!(self, Self::NoBudgetConfigured)
    }

    /// Check if this is an invalid-amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount { .. })
    }
}

/// Result type alias for spendwise operations
pub type SpendwiseResult<T> = Result<T, SpendwiseError>;
