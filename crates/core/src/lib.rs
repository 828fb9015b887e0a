//! Core business logic for Divvy.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `split` - Split policies and per-participant share computation
//! - `ledger` - Pairwise signed balances with prune-on-zero
//! - `group` - Membership plus expense and settlement operations
//! - `directory` - Registry of users and groups, the caller boundary

pub mod directory;
pub mod group;
pub mod ledger;
pub mod split;

pub use directory::{BalanceReport, Directory, DirectoryError, User};
pub use group::{BalanceEntry, Direction, Group, GroupError, MemberBalances};
pub use ledger::{BalanceLedger, LedgerError};
pub use split::{Split, SplitError, SplitPolicy, compute_splits};
