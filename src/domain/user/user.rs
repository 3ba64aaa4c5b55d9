//! User entity and role enumeration.
//!
//! Users are created by the registration flow (out of scope here) and
//! mutated only by the admin-promotion operation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

/// Role attached to a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Default role for registered users.
    #[default]
    Patient,
    /// Grants elevated mutations (promotion, doctor catalog edits).
    Admin,
}

impl Role {
    /// Stable string form used in storage and responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Admin => "admin",
        }
    }
}

/// A registered user of the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Unique within the identity store.
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// True when this user carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Candidate user supplied by the registration endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}
