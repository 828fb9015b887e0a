//! Directory error types.

use divvy_shared::types::{GroupId, UserId};
use thiserror::Error;

use crate::group::GroupError;

/// Errors crossing the directory boundary.
///
/// This is the single error surface callers see: id lookups fail here,
/// everything deeper arrives wrapped via `From`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// No user registered under this id.
    #[error("Unknown user {0}")]
    UserNotFound(UserId),

    /// No group registered under this id.
    #[error("Unknown group {0}")]
    GroupNotFound(GroupId),

    /// The group rejected the operation.
    #[error(transparent)]
    Group(#[from] GroupError),
}
