//! HTTP handlers for subscription endpoints.

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::subscription::{
    CancelCheckoutCommand, CheckoutMode, CompleteSubscriptionCommand, GetSubscriptionQuery,
    InitiateSubscriptionCommand, InitiateSubscriptionResult, SyncSubscriptionStatusCommand,
};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::domain::subscription::Plan;

use super::dto::{
    BasicActivatedResponse, CancelledResponse, CheckoutStartedResponse, CompletedResponse,
    CreateSubscriptionRequest, IntentStartedResponse, SessionCallbackParams,
    SubscriptionResponse, SubscriptionViewResponse,
};

fn require_session_id(params: &SessionCallbackParams) -> Result<String, ApiError> {
    match params.session_id.as_deref() {
        None | Some("") => Err(ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Session ID is required",
        )),
        // The redirect placeholder arrives verbatim when the endpoint is
        // opened directly instead of through the provider redirect.
        Some("{CHECKOUT_SESSION_ID}") => Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "Invalid session_id provided: likely accessed directly",
        )),
        Some(session_id) => Ok(session_id.to_string()),
    }
}

/// GET /api/v1/subscriptions
pub async fn get_subscription(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .get_subscription_handler()
        .handle(GetSubscriptionQuery { user_id: user.id })
        .await?;

    Ok(Json(SubscriptionViewResponse {
        subscription: result.subscription.as_ref().map(SubscriptionResponse::from),
    }))
}

/// POST /api/v1/subscriptions
pub async fn create_subscription(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<CreateSubscriptionRequest>,
) -> Result<Response, ApiError> {
    let plan_name = request.plan.to_lowercase();
    let Some(plan) = Plan::parse(&plan_name) else {
        return Err(ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Invalid plan: {}", request.plan),
        ));
    };

    let mode = match request.mode.as_deref() {
        None | Some("web") => CheckoutMode::Web,
        Some("mobile") => CheckoutMode::Mobile,
        Some(other) => {
            return Err(ApiError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Invalid mode: {}", other),
            ))
        }
    };

    let result = state
        .initiate_subscription_handler()
        .handle(InitiateSubscriptionCommand {
            user_id: user.id,
            plan,
            mode,
        })
        .await?;

    let response = match result {
        InitiateSubscriptionResult::BasicActivated { subscription } => (
            StatusCode::CREATED,
            Json(BasicActivatedResponse {
                message: "Free basic subscription created".to_string(),
                subscription_id: subscription.id.to_string(),
            }),
        )
            .into_response(),
        InitiateSubscriptionResult::CheckoutStarted {
            subscription,
            session_id,
            checkout_url,
        } => (
            StatusCode::CREATED,
            Json(CheckoutStartedResponse {
                checkout_url,
                session_id,
                subscription_id: subscription.id.to_string(),
            }),
        )
            .into_response(),
        InitiateSubscriptionResult::IntentStarted {
            subscription,
            intent_id,
            client_secret,
        } => (
            StatusCode::CREATED,
            Json(IntentStartedResponse {
                intent_id,
                client_secret,
                subscription_id: subscription.id.to_string(),
            }),
        )
            .into_response(),
    };

    Ok(response)
}

/// GET /api/v1/subscriptions/success?session_id=
pub async fn subscription_success(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<SessionCallbackParams>,
) -> Result<impl IntoResponse, ApiError> {
    let session_id = require_session_id(&params)?;

    let result = state
        .complete_subscription_handler()
        .handle(CompleteSubscriptionCommand {
            user_id: user.id,
            reference: session_id,
        })
        .await?;

    Ok(Json(CompletedResponse {
        message: "Subscription completed successfully".to_string(),
        subscription_id: result.subscription.id.to_string(),
        plan: result.subscription.plan,
    }))
}

/// GET /api/v1/subscriptions/cancel?session_id=
///
/// No auth: the provider redirect carries no bearer token, and the
/// operation only flips a pending checkout to cancelled.
pub async fn subscription_cancel(
    State(state): State<AppState>,
    Query(params): Query<SessionCallbackParams>,
) -> Result<impl IntoResponse, ApiError> {
    let session_id = require_session_id(&params)?;

    state
        .cancel_checkout_handler()
        .handle(CancelCheckoutCommand {
            session_id: session_id.clone(),
        })
        .await?;

    Ok(Json(CancelledResponse {
        message: "Subscription cancelled successfully".to_string(),
        session_id,
    }))
}

/// GET /api/v1/subscriptions/status
pub async fn subscription_status(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .sync_subscription_status_handler()
        .handle(SyncSubscriptionStatusCommand { user_id: user.id })
        .await?;

    Ok(Json(SubscriptionViewResponse {
        subscription: Some(SubscriptionResponse::from(&result.subscription)),
    }))
}
