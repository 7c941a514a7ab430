//! Subscription handlers - plan selection, payment reconciliation, and
//! lifecycle queries.

mod cancel_checkout;
mod complete_subscription;
mod get_subscription;
mod initiate_subscription;
mod sync_subscription_status;

pub use cancel_checkout::{CancelCheckoutCommand, CancelCheckoutHandler, CancelCheckoutResult};
pub use complete_subscription::{
    CompleteSubscriptionCommand, CompleteSubscriptionHandler, CompleteSubscriptionResult,
};
pub use get_subscription::{GetSubscriptionHandler, GetSubscriptionQuery, GetSubscriptionResult};
pub use initiate_subscription::{
    CheckoutMode, CheckoutUrls, InitiateSubscriptionCommand, InitiateSubscriptionHandler,
    InitiateSubscriptionResult,
};
pub use sync_subscription_status::{
    SyncSubscriptionStatusCommand, SyncSubscriptionStatusHandler, SyncSubscriptionStatusResult,
};
