//! Shared types for Divvy.
//!
//! This crate provides the leaf types used across all other crates:
//! - Fixed-point money amounts in integer minor units
//! - Typed ids for type-safe entity references

pub mod types;

pub use types::{Amount, AmountError, GroupId, ParseIdError, UserId};
