//! Pairwise signed balances for one group.

use std::collections::BTreeMap;

use divvy_shared::types::{Amount, UserId};

use super::error::LedgerError;
use crate::split::Split;

/// Signed pairwise balances between group members.
///
/// One entry is stored per unordered member pair, keyed `(low, high)` by id,
/// holding the balance from `low`'s perspective: positive means `high` owes
/// `low`. Both directed views derive from that single entry, so
/// `net_balance(a, b) == -net_balance(b, a)` holds by construction and the
/// two perspectives can never drift apart. A pair that lands on exactly
/// zero is removed immediately, which keeps "no entry" and "settled"
/// synonymous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceLedger {
    balances: BTreeMap<(UserId, UserId), Amount>,
}

impl BalanceLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one expense into the ledger: every participant except the
    /// payer now owes the payer their share.
    ///
    /// Shares are expected to come from
    /// [`compute_splits`](crate::split::compute_splits), which never
    /// produces negative amounts. The payer's own share changes nothing;
    /// they paid themselves.
    pub fn apply_expense(&mut self, payer: UserId, splits: &[Split]) {
        for split in splits {
            if split.participant == payer || split.amount.is_zero() {
                continue;
            }
            self.apply_delta(payer, split.participant, split.amount);
        }
    }

    /// Records a direct payment from `from` to `to`, shrinking what `from`
    /// owes.
    ///
    /// Paying more than is owed is allowed and flips the pair: the
    /// recipient now owes the surplus back.
    pub fn apply_settlement(
        &mut self,
        from: UserId,
        to: UserId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::NonPositiveAmount(amount));
        }
        if from == to {
            return Err(LedgerError::SelfSettlement(from));
        }
        self.apply_delta(from, to, amount);
        Ok(())
    }

    /// Signed balance from `a`'s perspective: positive means `b` owes `a`.
    /// Settled pairs and unknown users read as zero, as does asking about
    /// anyone against themselves.
    #[must_use]
    pub fn net_balance(&self, a: UserId, b: UserId) -> Amount {
        if a == b {
            return Amount::ZERO;
        }
        let (key, flipped) = pair_key(a, b);
        let stored = self.balances.get(&key).copied().unwrap_or(Amount::ZERO);
        if flipped { -stored } else { stored }
    }

    /// All nonzero balances involving `user`, signed from their
    /// perspective and ordered by counterparty id.
    #[must_use]
    pub fn balances_for(&self, user: UserId) -> Vec<(UserId, Amount)> {
        let mut entries: Vec<(UserId, Amount)> = self
            .balances
            .iter()
            .filter_map(|(&(low, high), &amount)| {
                if low == user {
                    Some((high, amount))
                } else if high == user {
                    Some((low, -amount))
                } else {
                    None
                }
            })
            .collect();
        entries.sort_by_key(|&(counterparty, _)| counterparty);
        entries
    }

    /// True when every pair is settled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Number of unsettled pairs.
    #[must_use]
    pub fn unsettled_pairs(&self) -> usize {
        self.balances.len()
    }

    /// Applies `balance(a, b) += delta` and its mirror as one unit, then
    /// prunes the pair if it reached exactly zero. Callers guarantee
    /// `a != b`.
    fn apply_delta(&mut self, a: UserId, b: UserId, delta: Amount) {
        let (key, flipped) = pair_key(a, b);
        let signed = if flipped { -delta } else { delta };
        let entry = self.balances.entry(key).or_insert(Amount::ZERO);
        *entry += signed;
        if entry.is_zero() {
            self.balances.remove(&key);
        }
    }
}

/// Canonical storage key for an unordered pair: smaller id first. The flag
/// reports whether the queried direction is flipped relative to storage.
fn pair_key(a: UserId, b: UserId) -> ((UserId, UserId), bool) {
    if a <= b { ((a, b), false) } else { ((b, a), true) }
}
