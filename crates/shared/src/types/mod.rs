//! Common types used across the application.

pub mod id;
pub mod money;

pub use id::{GroupId, ParseIdError, UserId};
pub use money::{Amount, AmountError};
