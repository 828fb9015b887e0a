//! Ledger error types.

use divvy_shared::types::{Amount, UserId};
use thiserror::Error;

/// Errors that can occur during ledger mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Settlement amounts must be strictly positive.
    #[error("Settlement amount must be positive, got {0}")]
    NonPositiveAmount(Amount),

    /// A member cannot settle a debt with themselves.
    #[error("{0} cannot settle with themselves")]
    SelfSettlement(UserId),
}
