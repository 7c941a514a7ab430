//! User aggregate entity.
//!
//! Each account owns at most one subscription; destroying a user cascades
//! its subscription and wishlist rows at the persistence layer.

use crate::domain::foundation::{Role, Timestamp, UserId, ValidationError};
use serde::{Deserialize, Serialize};

/// Maximum length for first and last names.
const NAME_MAX_LEN: usize = 50;

/// Minimum plaintext password length at registration.
const PASSWORD_MIN_LEN: usize = 6;

/// Required length of a mobile number (digits only).
const MOBILE_LEN: usize = 10;

/// User account aggregate.
///
/// # Invariants
///
/// - `email` is unique (database constraint)
/// - `password_hash` is an argon2 PHC string, never plaintext
/// - `device_token` is only meaningful when `notifications_enabled`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for this account.
    pub id: UserId,

    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,

    /// Email address, unique across accounts.
    pub email: String,

    /// Argon2 PHC-formatted password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Ten-digit mobile number.
    pub mobile_number: String,

    /// Account role.
    pub role: Role,

    /// Push registration token, if the device registered one.
    pub device_token: Option<String>,

    /// Whether the user opted into push notifications.
    pub notifications_enabled: bool,

    /// When the account was created.
    pub created_at: Timestamp,

    /// When the account was last updated.
    pub updated_at: Timestamp,
}

impl User {
    /// Creates a user from a validated registration and a password hash.
    ///
    /// New signups always get the `User` role; elevated roles are assigned
    /// through back-office tooling.
    pub fn register(id: UserId, registration: &Registration, password_hash: String) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            first_name: registration.first_name.clone(),
            last_name: registration.last_name.clone(),
            email: registration.email.clone(),
            password_hash,
            mobile_number: registration.mobile_number.clone(),
            role: Role::User,
            device_token: None,
            notifications_enabled: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns "First Last" for display.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Updates push registration fields. `None` leaves a field untouched.
    pub fn update_preferences(
        &mut self,
        device_token: Option<String>,
        notifications_enabled: Option<bool>,
    ) {
        if let Some(token) = device_token {
            self.device_token = Some(token);
        }
        if let Some(enabled) = notifications_enabled {
            self.notifications_enabled = enabled;
        }
        self.updated_at = Timestamp::now();
    }

    /// Returns true if this user should receive push notifications.
    pub fn wants_push(&self) -> bool {
        self.notifications_enabled && self.device_token.is_some()
    }
}

/// Registration input, validated before an account is created.
#[derive(Debug, Clone, Deserialize)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub mobile_number: String,
}

impl Registration {
    /// Validates all fields, collecting every failure.
    ///
    /// Returns the full list so the API can report all problems at once.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        validate_name(&mut errors, "first_name", &self.first_name);
        validate_name(&mut errors, "last_name", &self.last_name);
        validate_email(&mut errors, &self.email);

        if self.password.chars().count() < PASSWORD_MIN_LEN {
            errors.push(ValidationError::too_short(
                "password",
                PASSWORD_MIN_LEN,
                self.password.chars().count(),
            ));
        }

        if self.mobile_number.len() != MOBILE_LEN
            || !self.mobile_number.bytes().all(|b| b.is_ascii_digit())
        {
            errors.push(ValidationError::invalid_format(
                "mobile_number",
                format!("must be exactly {} digits", MOBILE_LEN),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn validate_name(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.is_empty() {
        errors.push(ValidationError::empty_field(field));
    } else if value.chars().count() > NAME_MAX_LEN {
        errors.push(ValidationError::too_long(
            field,
            NAME_MAX_LEN,
            value.chars().count(),
        ));
    }
}

/// Email shape check: exactly one `@`, non-empty halves, no whitespace.
fn validate_email(errors: &mut Vec<ValidationError>, value: &str) {
    if value.is_empty() {
        errors.push(ValidationError::empty_field("email"));
        return;
    }

    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next();

    let well_formed = match domain {
        Some(domain) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if !well_formed {
        errors.push(ValidationError::invalid_format(
            "email",
            "must look like local@domain",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_registration() -> Registration {
        Registration {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "s3cret!".to_string(),
            mobile_number: "5551234567".to_string(),
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert!(valid_registration().validate().is_ok());
    }

    #[test]
    fn register_defaults_to_user_role_with_notifications_on() {
        let reg = valid_registration();
        let user = User::register(UserId::new(), &reg, "$argon2id$stub".to_string());

        assert_eq!(user.role, Role::User);
        assert!(user.notifications_enabled);
        assert!(user.device_token.is_none());
        assert_eq!(user.full_name(), "Ada Lovelace");
    }

    #[test]
    fn empty_first_name_is_rejected() {
        let mut reg = valid_registration();
        reg.first_name = String::new();
        let errors = reg.validate().unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::EmptyField { ref field } if field == "first_name"
        ));
    }

    #[test]
    fn name_over_fifty_chars_is_rejected() {
        let mut reg = valid_registration();
        reg.last_name = "x".repeat(51);
        assert!(reg.validate().is_err());
    }

    #[test]
    fn short_password_is_rejected() {
        let mut reg = valid_registration();
        reg.password = "12345".to_string();
        assert!(reg.validate().is_err());
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for bad in ["plainaddress", "two@@example.com", "spaces in@example.com", "@example.com", "user@"] {
            let mut reg = valid_registration();
            reg.email = bad.to_string();
            assert!(reg.validate().is_err(), "expected rejection for {:?}", bad);
        }
    }

    #[test]
    fn mobile_number_must_be_ten_digits() {
        for bad in ["12345", "12345678901", "555123456a"] {
            let mut reg = valid_registration();
            reg.mobile_number = bad.to_string();
            assert!(reg.validate().is_err(), "expected rejection for {:?}", bad);
        }
    }

    #[test]
    fn all_failures_are_collected() {
        let reg = Registration {
            first_name: String::new(),
            last_name: String::new(),
            email: "nope".to_string(),
            password: "123".to_string(),
            mobile_number: "abc".to_string(),
        };
        let errors = reg.validate().unwrap_err();
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn update_preferences_is_partial() {
        let reg = valid_registration();
        let mut user = User::register(UserId::new(), &reg, "hash".to_string());

        user.update_preferences(Some("token-1".to_string()), None);
        assert_eq!(user.device_token.as_deref(), Some("token-1"));
        assert!(user.notifications_enabled);

        user.update_preferences(None, Some(false));
        assert_eq!(user.device_token.as_deref(), Some("token-1"));
        assert!(!user.notifications_enabled);
    }

    #[test]
    fn wants_push_requires_token_and_opt_in() {
        let reg = valid_registration();
        let mut user = User::register(UserId::new(), &reg, "hash".to_string());
        assert!(!user.wants_push());

        user.update_preferences(Some("token-1".to_string()), None);
        assert!(user.wants_push());

        user.update_preferences(None, Some(false));
        assert!(!user.wants_push());
    }
}
