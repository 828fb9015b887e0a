//! Registry of users and groups, and the caller-facing boundary.
//!
//! The directory owns every user and group by value and issues their ids
//! from per-kind counters. Callers hold plain ids and route all operations
//! through here; mutating operations take `&mut self`, so the borrow
//! checker serializes writers and no two-sided balance update can be
//! observed half-applied. Multi-threaded callers wrap the directory in a
//! `Mutex` at whatever granularity they need.

pub mod error;

pub use error::DirectoryError;

use std::collections::BTreeMap;
use std::fmt;

use divvy_shared::types::{Amount, GroupId, UserId};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::group::{Direction, Group, MemberBalances};
use crate::split::SplitPolicy;

/// A registered person.
///
/// Users are created through the directory and immutable afterwards;
/// everything else refers to them by id.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    display_name: String,
}

impl User {
    /// The user's id.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// The user's display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// Registry owning every user and group.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    users: BTreeMap<UserId, User>,
    groups: BTreeMap<GroupId, Group>,
    next_user: u64,
    next_group: u64,
}

impl Directory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user and returns their freshly issued id.
    pub fn create_user(&mut self, name: &str) -> UserId {
        self.next_user += 1;
        let id = UserId::from_index(self.next_user);
        self.users.insert(
            id,
            User {
                id,
                display_name: name.to_owned(),
            },
        );
        info!(user = %id, name, "User created");
        id
    }

    /// Registers a group and returns its freshly issued id.
    pub fn create_group(&mut self, name: &str) -> GroupId {
        self.next_group += 1;
        let id = GroupId::from_index(self.next_group);
        self.groups.insert(id, Group::new(id, name));
        info!(group = %id, name, "Group created");
        id
    }

    /// Looks up a user by id.
    pub fn user(&self, id: UserId) -> Result<&User, DirectoryError> {
        self.users.get(&id).ok_or(DirectoryError::UserNotFound(id))
    }

    /// Looks up a group by id.
    pub fn group(&self, id: GroupId) -> Result<&Group, DirectoryError> {
        self.groups
            .get(&id)
            .ok_or(DirectoryError::GroupNotFound(id))
    }

    /// Adds an existing user to an existing group. Adding someone twice
    /// changes nothing.
    pub fn add_member_to_group(
        &mut self,
        user_id: UserId,
        group_id: GroupId,
    ) -> Result<(), DirectoryError> {
        if !self.users.contains_key(&user_id) {
            return Err(DirectoryError::UserNotFound(user_id));
        }
        self.group_mut(group_id)?.add_member(user_id);
        Ok(())
    }

    /// Records a shared expense against a group.
    pub fn add_expense(
        &mut self,
        group_id: GroupId,
        description: &str,
        amount: Amount,
        payer: UserId,
        participants: &[UserId],
        policy: &SplitPolicy,
    ) -> Result<(), DirectoryError> {
        self.group_mut(group_id)?
            .add_expense(description, amount, payer, participants, policy)?;
        Ok(())
    }

    /// Records a direct payment between two members of a group.
    pub fn settle_payment(
        &mut self,
        group_id: GroupId,
        from: UserId,
        to: UserId,
        amount: Amount,
    ) -> Result<(), DirectoryError> {
        self.group_mut(group_id)?.settle(from, to, amount)?;
        Ok(())
    }

    /// Builds the balance report for a group, with display names attached
    /// for rendering.
    pub fn group_balances(&self, group_id: GroupId) -> Result<BalanceReport, DirectoryError> {
        let group = self.group(group_id)?;
        let names = group
            .members()
            .filter_map(|id| {
                self.users
                    .get(&id)
                    .map(|user| (id, user.display_name.clone()))
            })
            .collect();

        Ok(BalanceReport {
            group: group.id(),
            group_name: group.name().to_owned(),
            members: group.balance_report(),
            names,
        })
    }

    fn group_mut(&mut self, id: GroupId) -> Result<&mut Group, DirectoryError> {
        self.groups
            .get_mut(&id)
            .ok_or(DirectoryError::GroupNotFound(id))
    }
}

/// Balance report for one group: per-member balance lines plus a display
/// name table for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// The group the report describes.
    pub group: GroupId,
    /// The group's display name.
    pub group_name: String,
    /// Balance lines per member, members in id order.
    pub members: Vec<MemberBalances>,
    /// Display names for every member present when the report was built.
    pub names: BTreeMap<UserId, String>,
}

impl BalanceReport {
    /// Display name for a member, falling back to the raw id.
    #[must_use]
    pub fn display_name(&self, id: UserId) -> String {
        self.names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}

impl fmt::Display for BalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Balances for {}:", self.group_name)?;
        for member in &self.members {
            writeln!(f, "  {}:", self.display_name(member.member))?;
            if member.is_settled() {
                writeln!(f, "    settled")?;
            }
            for entry in &member.entries {
                let counterparty = self.display_name(entry.counterparty);
                match entry.direction {
                    Direction::IsOwed => {
                        writeln!(f, "    is owed {} by {counterparty}", entry.amount)?;
                    }
                    Direction::Owes => {
                        writeln!(f, "    owes {} to {counterparty}", entry.amount)?;
                    }
                }
            }
        }
        Ok(())
    }
}
