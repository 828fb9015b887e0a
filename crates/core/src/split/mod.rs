//! Expense splitting logic.
//!
//! This module implements share computation for shared expenses:
//! - Split policies (equal, exact, percentage)
//! - Per-participant share calculation with exact totals
//! - Validation errors for malformed splits

pub mod calculator;
pub mod error;
pub mod policy;

#[cfg(test)]
mod calculator_props;

pub use calculator::{Split, compute_splits};
pub use error::SplitError;
pub use policy::SplitPolicy;
