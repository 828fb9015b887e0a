//! Per-participant share computation using the Largest Remainder Method.
//!
//! Shares are computed so that their sum EXACTLY equals the expense total
//! (no minor units lost or gained):
//! 1. Calculate each participant's exact share
//! 2. Round down to whole minor units
//! 3. Distribute the leftover units to the largest fractional remainders

use std::collections::BTreeSet;

use divvy_shared::types::{Amount, UserId};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::error::SplitError;
use super::policy::SplitPolicy;

/// One participant's share of an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    /// Who owes this share.
    pub participant: UserId,
    /// How much of the total they owe.
    pub amount: Amount,
}

/// Computes per-participant shares for one expense.
///
/// Pure function: validates the inputs against the policy and returns one
/// share per participant, in participant order, summing exactly to `total`.
/// Callers fold the result into a ledger afterwards; nothing is mutated
/// here, so a rejected expense leaves no trace.
pub fn compute_splits(
    total: Amount,
    participants: &[UserId],
    policy: &SplitPolicy,
) -> Result<Vec<Split>, SplitError> {
    if !total.is_positive() {
        return Err(SplitError::NonPositiveTotal(total));
    }
    if participants.is_empty() {
        return Err(SplitError::NoParticipants);
    }
    if let Some(duplicate) = first_duplicate(participants) {
        return Err(SplitError::DuplicateParticipant(duplicate));
    }

    let amounts = match policy {
        SplitPolicy::Equal => allocate_equal(total, participants.len()),
        SplitPolicy::Exact(shares) => exact_shares(total, participants.len(), shares)?,
        SplitPolicy::Percentage(percentages) => {
            allocate_by_percentages(total, participants.len(), percentages)?
        }
    };

    Ok(participants
        .iter()
        .zip(amounts)
        .map(|(&participant, amount)| Split {
            participant,
            amount,
        })
        .collect())
}

fn first_duplicate(participants: &[UserId]) -> Option<UserId> {
    let mut seen = BTreeSet::new();
    participants.iter().copied().find(|id| !seen.insert(*id))
}

/// Equal allocation on minor units. The first `total % count` participants
/// absorb one extra unit each, so the shares always sum to the total.
fn allocate_equal(total: Amount, count: usize) -> Vec<Amount> {
    #[allow(clippy::cast_possible_wrap)]
    let count = count as i64;
    let base = total.minor_units() / count;
    let extra = total.minor_units() % count;

    (0..count)
        .map(|i| Amount::from_minor_units(if i < extra { base + 1 } else { base }))
        .collect()
}

/// Validates explicit shares: one per participant, none negative, summing
/// exactly to the total.
fn exact_shares(
    total: Amount,
    count: usize,
    shares: &[Amount],
) -> Result<Vec<Amount>, SplitError> {
    if shares.len() != count {
        return Err(SplitError::ValueCountMismatch {
            expected: count,
            actual: shares.len(),
        });
    }
    if let Some(share) = shares.iter().copied().find(|share| share.is_negative()) {
        return Err(SplitError::NegativeShare(share));
    }
    let sum: Amount = shares.iter().sum();
    if sum != total {
        return Err(SplitError::ShareSumMismatch { total, sum });
    }
    Ok(shares.to_vec())
}

/// Percentage allocation via largest remainder: floor every share to whole
/// minor units, then hand the leftover units to the largest fractional
/// remainders. The sort is stable, so earlier participants win ties.
fn allocate_by_percentages(
    total: Amount,
    count: usize,
    percentages: &[Decimal],
) -> Result<Vec<Amount>, SplitError> {
    if percentages.len() != count {
        return Err(SplitError::ValueCountMismatch {
            expected: count,
            actual: percentages.len(),
        });
    }
    if let Some(percentage) = percentages.iter().copied().find(|&p| p < Decimal::ZERO) {
        return Err(SplitError::NegativePercentage(percentage));
    }
    let percentage_sum: Decimal = percentages.iter().copied().sum();
    if percentage_sum != Decimal::ONE_HUNDRED {
        return Err(SplitError::PercentageSumMismatch(percentage_sum));
    }

    let total_minor = Decimal::from(total.minor_units());

    // Exact minor-unit share per participant
    let exact: Vec<Decimal> = percentages
        .iter()
        .map(|p| total_minor * *p / Decimal::ONE_HUNDRED)
        .collect();

    // Round down each
    let mut allocated: Vec<i64> = exact
        .iter()
        .map(|share| share.floor().to_i64().unwrap_or(0))
        .collect();

    // Leftover units to distribute
    let assigned: i64 = allocated.iter().sum();
    let leftover = usize::try_from(total.minor_units() - assigned).unwrap_or(0);

    if leftover > 0 {
        let mut remainders: Vec<(usize, Decimal)> = exact
            .iter()
            .zip(allocated.iter())
            .enumerate()
            .map(|(i, (share, floor))| (i, share - Decimal::from(*floor)))
            .collect();
        remainders.sort_by(|a, b| b.1.cmp(&a.1));

        for (idx, _) in remainders.iter().take(leftover) {
            allocated[*idx] += 1;
        }
    }

    Ok(allocated.into_iter().map(Amount::from_minor_units).collect())
}
