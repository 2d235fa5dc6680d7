//! Identity newtypes for the three record kinds
//!
//! Records reference each other by these ids; a `CategoryId` can never be
//! handed to something expecting a `BudgetId`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! record_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Prefix used by the short display form
            pub const PREFIX: &'static str = $prefix;

            /// Generate a fresh random id
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse a full UUID, with or without the display prefix
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                let s = s.trim();
                let s = s.strip_prefix($prefix).unwrap_or(s);
                Uuid::parse_str(s).map(Self)
            }

            /// Whether `fragment` identifies this id
            ///
            /// Accepts the short display form (`cat-1a2b3c4d`), a bare hex
            /// prefix of the UUID, or the full UUID.
            pub fn matches(&self, fragment: &str) -> bool {
                let fragment = fragment.trim().to_ascii_lowercase();
                let fragment = fragment.strip_prefix($prefix).unwrap_or(&fragment);
                !fragment.is_empty() && self.0.to_string().starts_with(fragment)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let uuid = self.0.to_string();
                write!(f, "{}{}", $prefix, &uuid[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

record_id!(TransactionId, "txn-");
record_id!(CategoryId, "cat-");
record_id!(BudgetId, "bud-");
