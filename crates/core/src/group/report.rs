//! Balance report types.

use divvy_shared::types::{Amount, UserId};
use serde::{Deserialize, Serialize};

/// Which way a pairwise balance points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// The counterparty owes this member.
    IsOwed,
    /// This member owes the counterparty.
    Owes,
}

/// One nonzero balance line, resolved from a member's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEntry {
    /// The other member of the pair.
    pub counterparty: UserId,
    /// Who owes whom.
    pub direction: Direction,
    /// Magnitude of the debt; always positive.
    pub amount: Amount,
}

impl BalanceEntry {
    /// Resolves a signed balance into a direction plus magnitude.
    pub(crate) fn from_signed(counterparty: UserId, amount: Amount) -> Self {
        if amount.is_negative() {
            Self {
                counterparty,
                direction: Direction::Owes,
                amount: amount.abs(),
            }
        } else {
            Self {
                counterparty,
                direction: Direction::IsOwed,
                amount,
            }
        }
    }
}

/// All nonzero balances for one member; no entries means fully settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberBalances {
    /// The member these lines belong to.
    pub member: UserId,
    /// Nonzero balance lines, ordered by counterparty id.
    pub entries: Vec<BalanceEntry>,
}

impl MemberBalances {
    /// True when this member owes nothing and is owed nothing.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_signed_resolves_direction() {
        let counterparty = UserId::from_index(2);

        let credit = BalanceEntry::from_signed(counterparty, Amount::from_major_units(200));
        assert_eq!(credit.direction, Direction::IsOwed);
        assert_eq!(credit.amount, Amount::from_major_units(200));

        let debt = BalanceEntry::from_signed(counterparty, Amount::from_major_units(-200));
        assert_eq!(debt.direction, Direction::Owes);
        assert_eq!(debt.amount, Amount::from_major_units(200));
    }

    #[test]
    fn test_is_settled() {
        let member = UserId::from_index(1);
        assert!(MemberBalances { member, entries: vec![] }.is_settled());

        let entry = BalanceEntry::from_signed(UserId::from_index(2), Amount::from_minor_units(1));
        assert!(
            !MemberBalances {
                member,
                entries: vec![entry],
            }
            .is_settled()
        );
    }
}
