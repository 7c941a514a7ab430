//! Subscription-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InvalidPlan | 422 |
//! | NotFoundForUser | 404 |
//! | PendingNotFound | 404 |
//! | PaymentNotCompleted | 422 |
//! | PaymentFailed | 422 |
//! | InvalidState | 422 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

/// Subscription operation errors.
#[derive(Debug, Clone)]
pub enum SubscriptionError {
    /// Plan name is not one of the known tiers.
    InvalidPlan(String),

    /// No subscription exists for this user.
    NotFoundForUser(UserId),

    /// No pending subscription matches this checkout reference. Guards
    /// replay with stale or foreign session ids.
    PendingNotFound { reference: String },

    /// The external payment for this reference has not completed.
    PaymentNotCompleted {
        reference: String,
        payment_status: String,
    },

    /// The payment provider rejected or failed an operation.
    PaymentFailed { reason: String },

    /// The requested status change is not allowed from the current state.
    InvalidState { reason: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl SubscriptionError {
    pub fn invalid_plan(plan: impl Into<String>) -> Self {
        SubscriptionError::InvalidPlan(plan.into())
    }

    pub fn not_found_for_user(user_id: UserId) -> Self {
        SubscriptionError::NotFoundForUser(user_id)
    }

    pub fn pending_not_found(reference: impl Into<String>) -> Self {
        SubscriptionError::PendingNotFound {
            reference: reference.into(),
        }
    }

    pub fn payment_not_completed(
        reference: impl Into<String>,
        payment_status: impl Into<String>,
    ) -> Self {
        SubscriptionError::PaymentNotCompleted {
            reference: reference.into(),
            payment_status: payment_status.into(),
        }
    }

    pub fn payment_failed(reason: impl Into<String>) -> Self {
        SubscriptionError::PaymentFailed {
            reason: reason.into(),
        }
    }

    pub fn invalid_state(reason: impl Into<String>) -> Self {
        SubscriptionError::InvalidState {
            reason: reason.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SubscriptionError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SubscriptionError::InvalidPlan(_) => ErrorCode::ValidationFailed,
            SubscriptionError::NotFoundForUser(_) => ErrorCode::SubscriptionNotFound,
            SubscriptionError::PendingNotFound { .. } => ErrorCode::SubscriptionNotFound,
            SubscriptionError::PaymentNotCompleted { .. } => ErrorCode::PaymentNotCompleted,
            SubscriptionError::PaymentFailed { .. } => ErrorCode::PaymentProviderError,
            SubscriptionError::InvalidState { .. } => ErrorCode::InvalidStateTransition,
            SubscriptionError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl std::fmt::Display for SubscriptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionError::InvalidPlan(plan) => write!(f, "Invalid plan: {}", plan),
            SubscriptionError::NotFoundForUser(user_id) => {
                write!(f, "No subscription for user {}", user_id)
            }
            SubscriptionError::PendingNotFound { reference } => {
                write!(f, "Pending subscription not found for {}", reference)
            }
            SubscriptionError::PaymentNotCompleted {
                reference,
                payment_status,
            } => write!(
                f,
                "Payment not completed for {} (status: {})",
                reference, payment_status
            ),
            SubscriptionError::PaymentFailed { reason } => {
                write!(f, "Payment failed: {}", reason)
            }
            SubscriptionError::InvalidState { reason } => {
                write!(f, "Invalid subscription state: {}", reason)
            }
            SubscriptionError::Infrastructure(message) => {
                write!(f, "Infrastructure error: {}", message)
            }
        }
    }
}

impl std::error::Error for SubscriptionError {}

impl From<DomainError> for SubscriptionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidStateTransition => SubscriptionError::invalid_state(err.message),
            ErrorCode::SubscriptionNotFound => {
                SubscriptionError::Infrastructure(err.message)
            }
            _ => SubscriptionError::Infrastructure(err.message),
        }
    }
}
