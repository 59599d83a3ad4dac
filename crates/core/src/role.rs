// crates/core/src/role.rs
//! User roles as a closed enumeration.
//!
//! The backend's role field drifted over time: early data carried
//! `Admin`/`User`, the current API speaks `STAFF`/`USER`, and `ADMIN` still
//! appears in old rows. The enum accepts all observed spellings on decode
//! and always writes the current uppercase forms; `Admin` exists only so old
//! rows keep decoding; new accounts get `Staff` or `User`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
pub enum Role {
    #[serde(rename = "STAFF")]
    Staff,
    #[default]
    #[serde(rename = "USER", alias = "User")]
    User,
    /// Legacy value. Read-compatible only; migrate to `Staff` on next write.
    #[serde(rename = "ADMIN", alias = "Admin")]
    Admin,
}

impl Role {
    /// Whether this value is retained only for old data.
    pub fn is_legacy(self) -> bool {
        matches!(self, Role::Admin)
    }

    /// The role a legacy value migrates to.
    pub fn migrated(self) -> Role {
        match self {
            Role::Admin => Role::Staff,
            other => other,
        }
    }

    /// The wire form sent to the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Staff => "STAFF",
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
