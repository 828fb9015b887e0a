//! Group operation errors.

use divvy_shared::types::{Amount, UserId};
use thiserror::Error;

use crate::ledger::LedgerError;
use crate::split::SplitError;

/// Errors that can occur during group operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// Everyone involved in an expense or settlement must be a member.
    #[error("User {0} is not a member of this group")]
    NotAMember(UserId),

    /// Expense amounts must be strictly positive.
    #[error("Expense amount must be positive, got {0}")]
    NonPositiveAmount(Amount),

    /// The split policy rejected the expense.
    #[error(transparent)]
    Split(#[from] SplitError),

    /// The ledger rejected the mutation.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
