//! Group membership and expense operations.
//!
//! A group owns its member set and its own balance ledger. Operations
//! validate everything up front and touch the ledger only once every check
//! has passed, so a rejected call leaves no partial state behind.

pub mod error;
pub mod report;

pub use error::GroupError;
pub use report::{BalanceEntry, Direction, MemberBalances};

use std::collections::BTreeSet;

use divvy_shared::types::{Amount, GroupId, UserId};
use tracing::info;

use crate::ledger::BalanceLedger;
use crate::split::{SplitPolicy, compute_splits};

/// A named collection of members sharing one balance ledger.
#[derive(Debug, Clone)]
pub struct Group {
    id: GroupId,
    name: String,
    members: BTreeSet<UserId>,
    ledger: BalanceLedger,
}

impl Group {
    /// Creates an empty group.
    ///
    /// Groups are normally created through the directory, which issues
    /// the id.
    #[must_use]
    pub fn new(id: GroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            members: BTreeSet::new(),
            ledger: BalanceLedger::new(),
        }
    }

    /// The group's id.
    #[must_use]
    pub const fn id(&self) -> GroupId {
        self.id
    }

    /// The group's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in id order.
    pub fn members(&self) -> impl Iterator<Item = UserId> + '_ {
        self.members.iter().copied()
    }

    /// Number of members.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// True if `user` belongs to this group.
    #[must_use]
    pub fn is_member(&self, user: UserId) -> bool {
        self.members.contains(&user)
    }

    /// Adds a member; adding an existing member changes nothing. Returns
    /// whether the member was new.
    pub fn add_member(&mut self, user: UserId) -> bool {
        let added = self.members.insert(user);
        if added {
            info!(group = %self.id, user = %user, "Member added");
        }
        added
    }

    /// Records a shared expense paid by `payer`, split among
    /// `participants` according to `policy`.
    ///
    /// The amount must be positive and the payer and every participant
    /// must already be members; the policy then validates its own values.
    /// The payer's own share is dropped during application, so only debts
    /// towards the payer remain.
    pub fn add_expense(
        &mut self,
        description: &str,
        amount: Amount,
        payer: UserId,
        participants: &[UserId],
        policy: &SplitPolicy,
    ) -> Result<(), GroupError> {
        if !amount.is_positive() {
            return Err(GroupError::NonPositiveAmount(amount));
        }
        self.ensure_member(payer)?;
        for &participant in participants {
            self.ensure_member(participant)?;
        }

        let splits = compute_splits(amount, participants, policy)?;
        self.ledger.apply_expense(payer, &splits);

        info!(
            group = %self.id,
            payer = %payer,
            amount = %amount,
            policy = policy.kind(),
            description,
            "Expense added"
        );
        Ok(())
    }

    /// Records a direct payment from `from` to `to`. Both must be
    /// members; the ledger enforces the amount and self-payment rules.
    pub fn settle(&mut self, from: UserId, to: UserId, amount: Amount) -> Result<(), GroupError> {
        self.ensure_member(from)?;
        self.ensure_member(to)?;
        self.ledger.apply_settlement(from, to, amount)?;

        info!(group = %self.id, from = %from, to = %to, amount = %amount, "Settlement recorded");
        Ok(())
    }

    /// Signed balance between two members from `a`'s perspective.
    #[must_use]
    pub fn net_balance(&self, a: UserId, b: UserId) -> Amount {
        self.ledger.net_balance(a, b)
    }

    /// True when no member owes any other member.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.ledger.is_empty()
    }

    /// Balance lines for every member, members in id order. A member with
    /// no entries is fully settled.
    #[must_use]
    pub fn balance_report(&self) -> Vec<MemberBalances> {
        self.members
            .iter()
            .map(|&member| MemberBalances {
                member,
                entries: self
                    .ledger
                    .balances_for(member)
                    .into_iter()
                    .map(|(counterparty, amount)| BalanceEntry::from_signed(counterparty, amount))
                    .collect(),
            })
            .collect()
    }

    fn ensure_member(&self, user: UserId) -> Result<(), GroupError> {
        if self.members.contains(&user) {
            Ok(())
        } else {
            Err(GroupError::NotAMember(user))
        }
    }
}
