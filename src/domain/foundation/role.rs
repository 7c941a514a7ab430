//! Account roles.

use serde::{Deserialize, Serialize};

/// Role attached to a user account.
///
/// Regular accounts sign up as `User`; `Supervisor` and `Admin` are
/// assigned through back-office tooling and may manage the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account. Catalog access gated by subscription tier.
    User,

    /// Content manager. May create, update, and delete movies.
    Supervisor,

    /// Full back-office access.
    Admin,
}

impl Role {
    /// Returns true if this role may manage the movie catalog.
    pub fn can_manage_catalog(&self) -> bool {
        matches!(self, Role::Supervisor | Role::Admin)
    }

    /// Returns true if this role bypasses subscription tier checks.
    pub fn bypasses_tier_gate(&self) -> bool {
        self.can_manage_catalog()
    }

    /// Returns the wire name for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Supervisor => "supervisor",
            Role::Admin => "admin",
        }
    }

    /// Parses a role from its wire name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Role::User),
            "supervisor" => Some(Role::Supervisor),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
