//! Split policies for shared expenses.

use divvy_shared::types::Amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How an expense is divided among its participants.
///
/// The value-carrying policies are positional: one value per participant,
/// in the same order as the participant list handed to
/// [`compute_splits`](super::compute_splits).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", content = "values", rename_all = "lowercase")]
pub enum SplitPolicy {
    /// Everyone owes the same share. When the total does not divide evenly,
    /// participants listed first absorb one extra minor unit each.
    Equal,
    /// Explicit per-participant amounts; they must sum to the expense total.
    Exact(Vec<Amount>),
    /// Per-participant percentages of the total; they must sum to exactly
    /// 100. Leftover minor units go to the largest fractional remainders.
    Percentage(Vec<Decimal>),
}

impl SplitPolicy {
    /// Short policy name for log events.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Exact(_) => "exact",
            Self::Percentage(_) => "percentage",
        }
    }
}
