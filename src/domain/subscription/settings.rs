//! Checkout policy knobs.
//!
//! These are domain decisions whose values come from configuration: how
//! long each paid tier runs, and whose clock wins when a payment
//! completes.

use serde::{Deserialize, Serialize};

use super::Plan;

/// Duration of each paid tier, in days.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlanSchedule {
    /// Gold tier duration.
    pub gold_days: i64,

    /// Platinum tier duration.
    pub platinum_days: i64,
}

impl PlanSchedule {
    /// Returns the duration for a paid plan, `None` for basic.
    pub fn duration_days(&self, plan: Plan) -> Option<i64> {
        match plan {
            Plan::Basic => None,
            Plan::Gold => Some(self.gold_days),
            Plan::Platinum => Some(self.platinum_days),
        }
    }
}

impl Default for PlanSchedule {
    fn default() -> Self {
        Self {
            gold_days: 1,
            platinum_days: 30,
        }
    }
}

/// What happens to `expiry_date` when a payment completes.
///
/// The value computed at checkout initiation is the default; adopting
/// the provider's reported period end is opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryPolicy {
    /// Keep the expiry set when the checkout was initiated.
    #[default]
    Preserve,

    /// Adopt the provider-reported period end when it reports one;
    /// fall back to the initiation expiry otherwise.
    Provider,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_has_no_duration() {
        let schedule = PlanSchedule::default();
        assert_eq!(schedule.duration_days(Plan::Basic), None);
    }

    #[test]
    fn default_durations_match_billing_terms() {
        let schedule = PlanSchedule::default();
        assert_eq!(schedule.duration_days(Plan::Gold), Some(1));
        assert_eq!(schedule.duration_days(Plan::Platinum), Some(30));
    }

    #[test]
    fn expiry_policy_defaults_to_preserve() {
        assert_eq!(ExpiryPolicy::default(), ExpiryPolicy::Preserve);
    }

    #[test]
    fn expiry_policy_deserializes_lowercase() {
        let policy: ExpiryPolicy = serde_json::from_str("\"provider\"").unwrap();
        assert_eq!(policy, ExpiryPolicy::Provider);
    }
}
