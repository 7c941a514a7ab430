//! Access policy for the movie catalog.
//!
//! All role- and tier-based decisions live here as explicit functions
//! taking (actor, resource) instead of conditionals scattered through
//! handlers. Callers must pass an already reconciled subscription; see
//! [`crate::domain::subscription::Subscription::reconcile`].

use crate::domain::foundation::Role;
use crate::domain::subscription::{Plan, Subscription};

/// Outcome of a policy check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Access granted.
    Granted,

    /// Access denied, with the reason for logging and the 403 body.
    Denied { reason: String },
}

impl AccessDecision {
    /// Creates a denial with a reason.
    pub fn denied(reason: impl Into<String>) -> Self {
        AccessDecision::Denied {
            reason: reason.into(),
        }
    }

    /// Returns true if access was granted.
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted)
    }
}

/// Decides whether `role` may view a movie requiring `required` tier.
///
/// Supervisors and admins bypass the tier gate. Regular users need a
/// reconciled subscription that is active on a sufficient plan; `None`
/// means the user has no subscription row at all (callers normally
/// provision a default basic one first, so `None` here is a denial,
/// not a panic).
pub fn can_view_movie(
    role: Role,
    subscription: Option<&Subscription>,
    required: Plan,
) -> AccessDecision {
    if role.bypasses_tier_gate() {
        return AccessDecision::Granted;
    }

    let Some(subscription) = subscription else {
        return AccessDecision::denied("no active subscription");
    };

    if !subscription.status.grants_access() {
        return AccessDecision::denied("subscription is not active");
    }

    if !subscription.plan.allows(required) {
        return AccessDecision::denied(format!(
            "{} plan does not include {} content",
            subscription.plan, required
        ));
    }

    AccessDecision::Granted
}

/// Decides whether `role` may create, update, or delete catalog entries.
pub fn can_manage_catalog(role: Role) -> AccessDecision {
    if role.can_manage_catalog() {
        AccessDecision::Granted
    } else {
        AccessDecision::denied("requires supervisor or admin role")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{SubscriptionId, UserId};

    fn active_subscription(plan: Plan) -> Subscription {
        let mut sub = Subscription::default_basic(SubscriptionId::new(), UserId::new());
        if plan.is_paid() {
            sub.begin_checkout(
                plan,
                "cus_1".to_string(),
                "cs_1".to_string(),
                None,
                crate::domain::foundation::Timestamp::now().add_days(30),
            );
            sub.activate(None).unwrap();
        }
        sub
    }

    #[test]
    fn admin_and_supervisor_bypass_tier_gate() {
        for role in [Role::Admin, Role::Supervisor] {
            let decision = can_view_movie(role, None, Plan::Platinum);
            assert!(decision.is_granted(), "{:?} should bypass", role);
        }
    }

    #[test]
    fn user_without_subscription_is_denied() {
        let decision = can_view_movie(Role::User, None, Plan::Basic);
        assert!(!decision.is_granted());
    }

    #[test]
    fn gold_user_sees_basic_and_gold_not_platinum() {
        let sub = active_subscription(Plan::Gold);
        assert!(can_view_movie(Role::User, Some(&sub), Plan::Basic).is_granted());
        assert!(can_view_movie(Role::User, Some(&sub), Plan::Gold).is_granted());
        assert!(!can_view_movie(Role::User, Some(&sub), Plan::Platinum).is_granted());
    }

    #[test]
    fn pending_subscription_is_denied() {
        let mut sub = active_subscription(Plan::Basic);
        sub.begin_checkout(
            Plan::Gold,
            "cus_1".to_string(),
            "cs_1".to_string(),
            None,
            crate::domain::foundation::Timestamp::now().add_days(1),
        );
        let decision = can_view_movie(Role::User, Some(&sub), Plan::Basic);
        assert!(!decision.is_granted());
    }

    #[test]
    fn denial_reason_names_the_plans() {
        let sub = active_subscription(Plan::Basic);
        match can_view_movie(Role::User, Some(&sub), Plan::Platinum) {
            AccessDecision::Denied { reason } => {
                assert!(reason.contains("basic"));
                assert!(reason.contains("platinum"));
            }
            AccessDecision::Granted => panic!("expected denial"),
        }
    }

    #[test]
    fn only_supervisor_and_admin_manage_catalog() {
        assert!(!can_manage_catalog(Role::User).is_granted());
        assert!(can_manage_catalog(Role::Supervisor).is_granted());
        assert!(can_manage_catalog(Role::Admin).is_granted());
    }
}
