//! Caller roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Privilege level of a user account.
///
/// Wire and storage format: `"USER"`, `"ADMIN"`, `"SUPER_ADMIN"`.
/// Ordering follows [`Role::rank`], so `role >= Role::Admin` reads as
/// "at least admin".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
    SuperAdmin,
}

/// Returned when a stored or submitted role string is not a known role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    /// Privilege rank: higher means more privileged.
    pub fn rank(self) -> u8 {
        match self {
            Self::User => 0,
            Self::Admin => 1,
            Self::SuperAdmin => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
            Self::SuperAdmin => "SUPER_ADMIN",
        }
    }
}

impl PartialOrd for Role {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Role {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Self::User),
            "ADMIN" => Ok(Self::Admin),
            "SUPER_ADMIN" => Ok(Self::SuperAdmin),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}
