//! Subscription aggregate entity.
//!
//! Each user owns exactly one Subscription (unique user_id at the
//! database level). Signup creates a basic/active record; selecting a
//! paid plan replaces the record's fields with a pending checkout, and
//! payment completion flips it active.
//!
//! # Invariants
//!
//! - `plan == Basic` implies `expiry_date == None`
//! - a paid plan in `Pending` status always carries a session reference
//! - reads that feed access decisions go through [`Subscription::reconcile`],
//!   never the raw `status` column

use crate::domain::foundation::{
    DomainError, ErrorCode, StateMachine, SubscriptionId, Timestamp, UserId,
};
use serde::{Deserialize, Serialize};

use super::{Plan, SubscriptionStatus};

/// Subscription aggregate - one per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique identifier for this record.
    pub id: SubscriptionId,

    /// Owning user (unique).
    pub user_id: UserId,

    /// Current plan tier.
    pub plan: Plan,

    /// Lifecycle status.
    pub status: SubscriptionStatus,

    /// Payment-provider customer reference, kept once created so repeat
    /// checkouts reuse the same external customer.
    pub payment_customer_id: Option<String>,

    /// External checkout-session or payment-intent reference for an
    /// in-flight purchase.
    pub session_id: Option<String>,

    /// When the external session stops being payable.
    pub session_expires_at: Option<Timestamp>,

    /// When the paid plan lapses. Always `None` for basic.
    pub expiry_date: Option<Timestamp>,

    /// When the record was created.
    pub created_at: Timestamp,

    /// When the record was last updated.
    pub updated_at: Timestamp,
}

/// Result of reconciling a subscription against the clock.
///
/// `downgraded` tells the caller whether the record changed and needs to
/// be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub subscription: Subscription,
    pub downgraded: bool,
}

impl Subscription {
    /// Creates the default free subscription every account starts with.
    pub fn default_basic(id: SubscriptionId, user_id: UserId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            user_id,
            plan: Plan::Basic,
            status: SubscriptionStatus::Active,
            payment_customer_id: None,
            session_id: None,
            session_expires_at: None,
            expiry_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a pending record for a paid checkout.
    ///
    /// Used when the user has no subscription row yet; an existing row is
    /// rewritten in place via [`Subscription::begin_checkout`].
    #[allow(clippy::too_many_arguments)]
    pub fn pending_checkout(
        id: SubscriptionId,
        user_id: UserId,
        plan: Plan,
        payment_customer_id: String,
        session_id: String,
        session_expires_at: Option<Timestamp>,
        expiry_date: Timestamp,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            user_id,
            plan,
            status: SubscriptionStatus::Pending,
            payment_customer_id: Some(payment_customer_id),
            session_id: Some(session_id),
            session_expires_at,
            expiry_date: Some(expiry_date),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rewrites this record as the free tier, active immediately.
    ///
    /// Plan selection replaces the record wholesale, so this applies from
    /// any prior state (including `Cancelled`) without a status transition.
    pub fn select_basic(&mut self) {
        self.plan = Plan::Basic;
        self.status = SubscriptionStatus::Active;
        self.session_id = None;
        self.session_expires_at = None;
        self.expiry_date = None;
        self.touch();
    }

    /// Rewrites this record as a pending paid checkout.
    ///
    /// Like [`select_basic`](Self::select_basic) this is a replacement,
    /// not a transition: starting a new purchase discards whatever the
    /// previous plan was.
    pub fn begin_checkout(
        &mut self,
        plan: Plan,
        payment_customer_id: String,
        session_id: String,
        session_expires_at: Option<Timestamp>,
        expiry_date: Timestamp,
    ) {
        self.plan = plan;
        self.status = SubscriptionStatus::Pending;
        self.payment_customer_id = Some(payment_customer_id);
        self.session_id = Some(session_id);
        self.session_expires_at = session_expires_at;
        self.expiry_date = Some(expiry_date);
        self.touch();
    }

    /// Activates this subscription after payment confirmation.
    ///
    /// `expiry_override` replaces the expiry computed at checkout time
    /// when the completion policy adopts the provider's period end.
    ///
    /// # Errors
    ///
    /// Returns error if the current status cannot transition to active.
    pub fn activate(&mut self, expiry_override: Option<Timestamp>) -> Result<(), DomainError> {
        self.transition(SubscriptionStatus::Active)?;
        if let Some(expiry) = expiry_override {
            self.expiry_date = Some(expiry);
        }
        self.touch();
        Ok(())
    }

    /// Deactivates this subscription.
    ///
    /// # Errors
    ///
    /// Returns error if the current status cannot transition to inactive.
    pub fn deactivate(&mut self) -> Result<(), DomainError> {
        self.transition(SubscriptionStatus::Inactive)?;
        self.touch();
        Ok(())
    }

    /// Cancels this subscription and clears the session reference.
    ///
    /// # Errors
    ///
    /// Returns error if the current status cannot transition to cancelled.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        self.transition(SubscriptionStatus::Cancelled)?;
        self.session_id = None;
        self.session_expires_at = None;
        self.touch();
        Ok(())
    }

    /// Returns true if a paid plan's expiry has passed at `now`.
    ///
    /// Basic never expires.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        if self.plan.is_basic() {
            return false;
        }
        match self.expiry_date {
            Some(expiry) => expiry <= now,
            None => false,
        }
    }

    /// Reconciles this record against the clock (downgrade-on-read).
    ///
    /// A lapsed paid plan that is still `Active` falls back to
    /// basic/active with session fields and expiry cleared. Every read
    /// that feeds an access decision must go through this function; the
    /// raw `status` column alone is not trustworthy for paid plans.
    ///
    /// Pure: returns the corrected copy plus a flag telling the caller
    /// whether anything changed and needs persisting. Applying it twice
    /// yields the same record (idempotent).
    pub fn reconcile(&self, now: Timestamp) -> Reconciled {
        if self.status == SubscriptionStatus::Active && self.is_expired_at(now) {
            let mut downgraded = self.clone();
            downgraded.plan = Plan::Basic;
            downgraded.status = SubscriptionStatus::Active;
            downgraded.session_id = None;
            downgraded.session_expires_at = None;
            downgraded.expiry_date = None;
            downgraded.updated_at = now;
            Reconciled {
                subscription: downgraded,
                downgraded: true,
            }
        } else {
            Reconciled {
                subscription: self.clone(),
                downgraded: false,
            }
        }
    }

    /// Returns true if this (already reconciled) record grants access to
    /// content requiring `required`.
    pub fn grants_access_to(&self, required: Plan) -> bool {
        self.status.grants_access() && self.plan.allows(required)
    }

    /// Returns true if this record is awaiting payment for `session_id`.
    pub fn is_pending_for(&self, session_id: &str) -> bool {
        self.status == SubscriptionStatus::Pending
            && self.session_id.as_deref() == Some(session_id)
    }

    fn transition(&mut self, target: SubscriptionStatus) -> Result<(), DomainError> {
        self.status = self.status.transition_to(target).map_err(|_| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!(
                    "Cannot transition subscription from {:?} to {:?}",
                    self.status, target
                ),
            )
        })?;
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
