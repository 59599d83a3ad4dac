// crates/core/src/user.rs
//! User-management payloads exchanged with the backend.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::role::Role;

/// One managed account as the backend serves and accepts it.
///
/// The schema has grown over time (`is_active` was added after the first
/// deployment), so unknown-to-us additions must not break decoding and
/// fields we know about default when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../frontend/src/types/generated/")]
pub struct UserAccount {
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub status: Role,
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Only present on create/update requests; the backend never echoes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

fn default_active() -> bool {
    true
}
