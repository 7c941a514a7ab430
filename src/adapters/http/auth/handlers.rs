//! HTTP handlers for account endpoints.

use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::application::handlers::user::{
    LoginUserCommand, LogoutUserCommand, RegisterUserCommand, UpdatePreferencesCommand,
};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;

use super::dto::{
    LoginRequest, LoginResponse, MessageResponse, SignupRequest, SignupResponse,
    UpdatePreferencesRequest, UserResponse,
};

/// POST /api/v1/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .register_user_handler()
        .handle(RegisterUserCommand {
            registration: request.into(),
        })
        .await?;

    let response = SignupResponse {
        message: "Signup successful".to_string(),
        token: result.token.token,
        user: UserResponse::from(&result.user),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .login_user_handler()
        .handle(LoginUserCommand {
            email: request.email,
            password: request.password,
        })
        .await?;

    let response = LoginResponse {
        token: result.token.token,
        user: UserResponse::from(&result.user),
    };

    Ok(Json(response))
}

/// POST /api/v1/logout
///
/// Revokes the token in the Authorization header.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let token = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| {
            ApiError::new(StatusCode::UNAUTHORIZED, "Authorization header missing")
        })?;

    state
        .logout_user_handler()
        .handle(LogoutUserCommand {
            token: token.to_string(),
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "Logout successful".to_string(),
    }))
}

/// POST /api/v1/update_preferences
pub async fn update_preferences(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<UpdatePreferencesRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .update_preferences_handler()
        .handle(UpdatePreferencesCommand {
            user_id: user.id,
            device_token: request.device_token,
            notifications_enabled: request.notifications_enabled,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "Preferences updated successfully".to_string(),
    }))
}
