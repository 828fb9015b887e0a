//! Pairwise balance bookkeeping.
//!
//! This module implements the core ledger functionality:
//! - Signed pairwise balances with a single canonical entry per pair
//! - Expense and settlement application
//! - Prune-on-zero so "no entry" always means "settled"
//! - Error types for ledger mutations

pub mod balance;
pub mod error;

#[cfg(test)]
mod balance_props;

pub use balance::BalanceLedger;
pub use error::LedgerError;
