//! Comparison rate results
//!
//! A rate compares a current aggregate amount against a reference baseline.
//! "No baseline exists" is a distinct outcome from a genuine 0% rate: an
//! empty history must not look like a verified zero-spend period, so the
//! result is a tagged enum rather than a numeric sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Outcome of comparing a current amount against a reference amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RateResult {
    /// The reference amount is zero or absent; there is nothing to compare
    /// against
    NoBaseline,

    /// The reference is non-zero and the current amount is zero: exactly 0%
    Zero,

    /// A real percentage, fractional part preserved
    Rate(f64),
}

impl RateResult {
    /// The percentage value, if one is defined
    ///
    /// `Zero` reports `Some(0.0)`; `NoBaseline` reports `None`.
    pub fn percent(&self) -> Option<f64> {
        match self {
            Self::NoBaseline => None,
            Self::Zero => Some(0.0),
            Self::Rate(percent) => Some(*percent),
        }
    }

    /// Check if no baseline existed for the comparison
    pub fn is_no_baseline(&self) -> bool {
        matches!(self, Self::NoBaseline)
    }
}

impl fmt::Display for RateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBaseline => write!(f, "no baseline"),
            Self::Zero => write!(f, "0%"),
            Self::Rate(percent) => write!(f, "{percent}%"),
        }
    }
}

/// A per-category rate with its resolved display name
///
/// The shape handed to presentation by the statistics operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRate {
    /// The category the rate applies to
    pub category_id: CategoryId,

    /// Display name resolved through the catalog
    pub category_name: String,

    /// The comparison outcome
    pub rate: RateResult,
}
