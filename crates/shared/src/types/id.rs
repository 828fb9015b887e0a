//! Typed ids for type-safe entity references.
//!
//! Using typed ids prevents accidentally passing a `UserId` where a
//! `GroupId` is expected. Ids are issued sequentially by the registry and
//! render as an opaque prefixed form (`user1`, `group7`); callers treat
//! them as handles, never as numbers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string is not a well-formed typed id.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed id: {0:?}")]
pub struct ParseIdError(String);

/// Macro to generate typed id wrappers.
macro_rules! typed_id {
    ($name:ident, $prefix:literal, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(into = "String", try_from = "String")]
        pub struct $name(u64);

        impl $name {
            /// Creates an id from its sequence number.
            ///
            /// Ids are normally issued by the registry; this is the escape
            /// hatch for tests and deserialized data.
            #[must_use]
            pub const fn from_index(index: u64) -> Self {
                Self(index)
            }

            /// Returns the sequence number behind the id.
            #[must_use]
            pub const fn index(self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.strip_prefix($prefix)
                    .filter(|digits| {
                        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
                    })
                    .and_then(|digits| digits.parse().ok())
                    .map(Self)
                    .ok_or_else(|| ParseIdError(s.to_owned()))
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.to_string()
            }
        }

        impl TryFrom<String> for $name {
            type Error = ParseIdError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }
    };
}

typed_id!(UserId, "user", "Unique identifier for a user.");
typed_id!(GroupId, "group", "Unique identifier for a group.");
