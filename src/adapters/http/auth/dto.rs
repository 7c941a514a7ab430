//! HTTP DTOs for account endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Role;
use crate::domain::user::{Registration, User};

/// Signup request body.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub mobile_number: String,
}

impl From<SignupRequest> for Registration {
    fn from(req: SignupRequest) -> Self {
        Registration {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
            mobile_number: req.mobile_number,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Preference update request body. Absent fields are left untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePreferencesRequest {
    #[serde(default)]
    pub device_token: Option<String>,
    #[serde(default)]
    pub notifications_enabled: Option<bool>,
}

/// Account fields exposed over the API (never the password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub notifications_enabled: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.full_name(),
            email: user.email.clone(),
            role: user.role,
            notifications_enabled: user.notifications_enabled,
        }
    }
}

/// Signup response body.
#[derive(Debug, Clone, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub token: String,
    pub user: UserResponse,
}

/// Login response body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Generic message response.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    #[test]
    fn user_response_omits_the_password_hash() {
        let registration = Registration {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "s3cret!".to_string(),
            mobile_number: "5551234567".to_string(),
        };
        let user = User::register(UserId::new(), &registration, "$argon2id$hash".to_string());

        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();
        assert_eq!(json["name"], "Ada Lovelace");
        assert_eq!(json["role"], "user");
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn preferences_request_defaults_to_untouched_fields() {
        let req: UpdatePreferencesRequest =
            serde_json::from_str(r#"{"notifications_enabled": false}"#).unwrap();
        assert!(req.device_token.is_none());
        assert_eq!(req.notifications_enabled, Some(false));
    }
}
