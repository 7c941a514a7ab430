//! RegisterUserHandler - Command handler for signup.
//!
//! Creates the account, provisions the default basic/active subscription,
//! and signs a bearer token so the client is logged in immediately.

use std::sync::Arc;

use crate::domain::foundation::{SubscriptionId, UserId};
use crate::domain::subscription::Subscription;
use crate::domain::user::{PasswordHasher, Registration, User, UserError};
use crate::ports::{IssuedToken, SubscriptionRepository, TokenIssuer, UserRepository};

/// Command to register a new account.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub registration: Registration,
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct RegisterUserResult {
    pub user: User,
    pub subscription: Subscription,
    pub token: IssuedToken,
}

/// Handler for account registration.
pub struct RegisterUserHandler {
    users: Arc<dyn UserRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
    token_issuer: Arc<dyn TokenIssuer>,
    hasher: PasswordHasher,
}

impl RegisterUserHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
        token_issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            subscriptions,
            token_issuer,
            hasher: PasswordHasher::new(),
        }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<RegisterUserResult, UserError> {
        cmd.registration.validate().map_err(UserError::validation)?;

        if self
            .users
            .find_by_email(&cmd.registration.email)
            .await
            .map_err(|e| UserError::infrastructure(e.to_string()))?
            .is_some()
        {
            return Err(UserError::email_taken(&cmd.registration.email));
        }

        let password_hash = self
            .hasher
            .hash(&cmd.registration.password)
            .map_err(|e| UserError::infrastructure(e.to_string()))?;

        let user = User::register(UserId::new(), &cmd.registration, password_hash);
        self.users.save(&user).await.map_err(UserError::from)?;

        // Every account starts on the free tier.
        let subscription = Subscription::default_basic(SubscriptionId::new(), user.id);
        self.subscriptions
            .save(&subscription)
            .await
            .map_err(|e| UserError::infrastructure(e.to_string()))?;

        let token = self
            .token_issuer
            .issue(&user)
            .map_err(|e| UserError::infrastructure(e.to_string()))?;

        tracing::info!(user_id = %user.id, "Account registered");

        Ok(RegisterUserResult {
            user,
            subscription,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockTokenIssuer;
    use crate::adapters::memory::{InMemorySubscriptionRepository, InMemoryUserRepository};
    use crate::domain::foundation::Role;
    use crate::domain::subscription::{Plan, SubscriptionStatus};
    use crate::ports::SubscriptionRepository as _;

    fn valid_registration() -> Registration {
        Registration {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "s3cret!".to_string(),
            mobile_number: "5551234567".to_string(),
        }
    }

    fn handler(
        users: Arc<InMemoryUserRepository>,
        subscriptions: Arc<InMemorySubscriptionRepository>,
    ) -> RegisterUserHandler {
        RegisterUserHandler::new(users, subscriptions, Arc::new(MockTokenIssuer::new()))
    }

    #[tokio::test]
    async fn signup_creates_user_with_basic_active_subscription() {
        let users = Arc::new(InMemoryUserRepository::new());
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());

        let result = handler(users.clone(), subscriptions.clone())
            .handle(RegisterUserCommand {
                registration: valid_registration(),
            })
            .await
            .unwrap();

        assert_eq!(result.user.role, Role::User);
        assert_eq!(result.subscription.plan, Plan::Basic);
        assert_eq!(result.subscription.status, SubscriptionStatus::Active);
        assert!(result.subscription.expiry_date.is_none());
        assert!(!result.token.token.is_empty());

        let stored = subscriptions
            .find_by_user(&result.user.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.plan, Plan::Basic);
    }

    #[tokio::test]
    async fn signup_hashes_the_password() {
        let users = Arc::new(InMemoryUserRepository::new());
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());

        let result = handler(users, subscriptions)
            .handle(RegisterUserCommand {
                registration: valid_registration(),
            })
            .await
            .unwrap();

        assert_ne!(result.user.password_hash, "s3cret!");
        assert!(result.user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let users = Arc::new(InMemoryUserRepository::new());
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());
        let h = handler(users, subscriptions);

        h.handle(RegisterUserCommand {
            registration: valid_registration(),
        })
        .await
        .unwrap();

        let err = h
            .handle(RegisterUserCommand {
                registration: valid_registration(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::EmailTaken(_)));
    }

    #[tokio::test]
    async fn invalid_registration_reports_all_field_errors() {
        let users = Arc::new(InMemoryUserRepository::new());
        let subscriptions = Arc::new(InMemorySubscriptionRepository::new());

        let mut registration = valid_registration();
        registration.password = "123".to_string();
        registration.mobile_number = "abc".to_string();

        let err = handler(users, subscriptions)
            .handle(RegisterUserCommand { registration })
            .await
            .unwrap_err();

        let UserError::Validation(errors) = err else {
            panic!("expected Validation");
        };
        assert_eq!(errors.len(), 2);
    }
}
