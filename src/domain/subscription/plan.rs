//! Subscription plan definitions.
//!
//! Plans form an ordered tier scale: basic < gold < platinum. Catalog
//! access compares the viewer's tier against the movie's required tier.

use serde::{Deserialize, Serialize};

/// Subscription plan tier.
///
/// Variant order matters: derived `Ord` gives basic < gold < platinum,
/// which is the access-control ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    /// Free tier. Always active, never expires.
    Basic,

    /// Paid mid tier.
    Gold,

    /// Paid top tier.
    Platinum,
}

impl Plan {
    /// Returns the numeric rank of this plan for ordinal comparison.
    pub fn rank(&self) -> u8 {
        match self {
            Plan::Basic => 0,
            Plan::Gold => 1,
            Plan::Platinum => 2,
        }
    }

    /// Returns true if a viewer on this plan may access content requiring
    /// `required`.
    pub fn allows(&self, required: Plan) -> bool {
        self.rank() >= required.rank()
    }

    /// Returns true for the free tier.
    pub fn is_basic(&self) -> bool {
        matches!(self, Plan::Basic)
    }

    /// Returns true for tiers that go through external checkout.
    pub fn is_paid(&self) -> bool {
        !self.is_basic()
    }

    /// Returns the wire name for this plan.
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Basic => "basic",
            Plan::Gold => "gold",
            Plan::Platinum => "platinum",
        }
    }

    /// Parses a plan from its wire name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "basic" => Some(Plan::Basic),
            "gold" => Some(Plan::Gold),
            "platinum" => Some(Plan::Platinum),
            _ => None,
        }
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
