//! spendwise - Budget allocation and expense analytics engine
//!
//! This library implements the pure computations behind a personal-finance
//! tracker: proposing a starting budget split for a new user from
//! population-wide spending ratios, recommending a per-category "safe to
//! spend today" amount, and comparing expense rates against the user's own
//! history and against peers.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core value types (money, ids, categories, aggregates, ...)
//! - `ledger`: The `LedgerReader` collaborator trait and an in-memory
//!   implementation
//! - `services`: The calculators and the `Advisor` orchestration façade
//!
//! The calculators are pure, synchronous functions: given identical inputs
//! they return identical outputs, never block, and touch no shared state.
//! All I/O lives behind [`ledger::LedgerReader`], which the surrounding
//! application implements against its storage layer.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use spendwise::ledger::MemoryLedger;
//! use spendwise::models::{BudgetEntry, BudgetMonth, CategoryId, Money, UserId};
//! use spendwise::services::Advisor;
//!
//! let mut ledger = MemoryLedger::new();
//! ledger.upsert_budget(BudgetEntry::new(
//!     UserId::new(1),
//!     CategoryId::new(1),
//!     BudgetMonth::new(2025, 4),
//!     Money::from_minor(30_000),
//! ))?;
//!
//! let advisor = Advisor::new(&ledger);
//! let today = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
//! let allowance = advisor.today_allowance(UserId::new(1), today)?;
//! assert_eq!(allowance.get(CategoryId::new(1)), Some(Money::from_minor(1_000)));
//! # Ok::<(), spendwise::SpendwiseError>(())
//! ```

pub mod error;
pub mod ledger;
pub mod models;
pub mod services;

pub use error::{SpendwiseError, SpendwiseResult};
