//! Subscription status state machine.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Subscription lifecycle status.
///
/// The downgrade-on-read fallback (expired paid plan reverting to basic)
/// is not a status transition: the record stays `Active` while its plan
/// and expiry are rewritten. See [`super::Subscription::reconcile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    /// Paid checkout started, awaiting payment confirmation.
    /// Grants no access.
    Pending,

    /// Subscription in good standing.
    Active,

    /// Explicitly deactivated. Can be reactivated.
    Inactive,

    /// Checkout abandoned or subscription cancelled. Terminal; a new
    /// plan selection replaces the record instead of transitioning it.
    Cancelled,
}

impl SubscriptionStatus {
    /// Returns true if this status grants catalog access (subject to the
    /// plan tier check).
    pub fn grants_access(&self) -> bool {
        matches!(self, SubscriptionStatus::Active)
    }
}

impl StateMachine for SubscriptionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubscriptionStatus::*;
        matches!(
            (self, target),
            // From PENDING
            (Pending, Active)
                | (Pending, Cancelled)
            // From ACTIVE
                | (Active, Active) // Plan change
                | (Active, Inactive)
                | (Active, Cancelled)
            // From INACTIVE
                | (Inactive, Active) // Reactivation
                | (Inactive, Cancelled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubscriptionStatus::*;
        match self {
            Pending => vec![Active, Cancelled],
            Active => vec![Active, Inactive, Cancelled],
            Inactive => vec![Active, Cancelled],
            Cancelled => vec![],
        }
    }
}
