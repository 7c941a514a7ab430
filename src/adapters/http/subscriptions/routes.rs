//! Route table for subscription endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{
    create_subscription, get_subscription, subscription_cancel, subscription_status,
    subscription_success,
};

/// Subscription routes, mounted at `/subscriptions`.
pub fn subscription_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_subscription).post(create_subscription))
        .route("/success", get(subscription_success))
        .route("/cancel", get(subscription_cancel))
        .route("/status", get(subscription_status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_build() {
        let _router: Router<AppState> = subscription_routes();
    }
}
