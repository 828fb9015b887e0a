//! Error types for split computation.

use divvy_shared::types::{Amount, UserId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur when computing splits.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SplitError {
    // ========== Amount Errors ==========
    /// Expense totals must be strictly positive.
    #[error("Expense total must be positive, got {0}")]
    NonPositiveTotal(Amount),

    // ========== Participant Errors ==========
    /// An expense needs at least one participant.
    #[error("Expense has no participants")]
    NoParticipants,

    /// A participant may appear only once per expense.
    #[error("Participant {0} appears more than once")]
    DuplicateParticipant(UserId),

    // ========== Policy Value Errors ==========
    /// Value-carrying policies need exactly one value per participant.
    #[error("Expected {expected} split values, got {actual}")]
    ValueCountMismatch {
        /// Number of participants.
        expected: usize,
        /// Number of supplied values.
        actual: usize,
    },

    /// Exact shares cannot be negative.
    #[error("Exact share cannot be negative, got {0}")]
    NegativeShare(Amount),

    /// Exact shares must add up to the expense total.
    #[error("Exact shares sum to {sum}, expense total is {total}")]
    ShareSumMismatch {
        /// The expense total.
        total: Amount,
        /// What the supplied shares add up to.
        sum: Amount,
    },

    /// Percentages cannot be negative.
    #[error("Percentage cannot be negative, got {0}")]
    NegativePercentage(Decimal),

    /// Percentages must add up to exactly 100.
    #[error("Percentages sum to {0}, expected exactly 100")]
    PercentageSumMismatch(Decimal),
}
