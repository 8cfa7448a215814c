//! Newtype wrappers for row identifiers.
//!
//! Every table uses a database-assigned `BIGINT` key. The wrappers keep a
//! site id from being passed where a hardware id is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

row_id!(
    /// Identifies a department, the root scoping unit.
    DepartmentId
);
row_id!(
    /// Identifies a user account.
    UserId
);
row_id!(
    /// Identifies a physical site.
    SiteId
);
row_id!(
    /// Identifies a hardware asset.
    HardwareId
);
row_id!(
    /// Identifies a virtual machine.
    VmId
);
row_id!(
    /// Identifies a deployment task.
    TaskId
);
