//! Service layer for the spendwise engine
//!
//! The three calculators are pure functions; the advisor wires them to a
//! ledger. Nothing in this layer owns mutable state or performs I/O beyond
//! what the ledger trait exposes.

pub mod advisor;
pub mod allowance;
pub mod recommend;
pub mod stats;

pub use advisor::Advisor;
pub use allowance::allocate_today;
pub use recommend::recommend;
pub use stats::{compare_rate, compare_totals};
