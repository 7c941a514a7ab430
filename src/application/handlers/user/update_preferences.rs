//! UpdatePreferencesHandler - Command handler for push preferences.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::{User, UserError};
use crate::ports::UserRepository;

/// Command to update push registration fields. `None` leaves a field
/// untouched.
#[derive(Debug, Clone)]
pub struct UpdatePreferencesCommand {
    pub user_id: UserId,
    pub device_token: Option<String>,
    pub notifications_enabled: Option<bool>,
}

/// Result of the preference update.
#[derive(Debug, Clone)]
pub struct UpdatePreferencesResult {
    pub user: User,
}

/// Handler for push preference updates.
pub struct UpdatePreferencesHandler {
    users: Arc<dyn UserRepository>,
}

impl UpdatePreferencesHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(
        &self,
        cmd: UpdatePreferencesCommand,
    ) -> Result<UpdatePreferencesResult, UserError> {
        let mut user = self
            .users
            .find_by_id(&cmd.user_id)
            .await
            .map_err(|e| UserError::infrastructure(e.to_string()))?
            .ok_or(UserError::NotFound(cmd.user_id))?;

        user.update_preferences(cmd.device_token, cmd.notifications_enabled);
        self.users
            .update(&user)
            .await
            .map_err(|e| UserError::infrastructure(e.to_string()))?;

        tracing::info!(
            user_id = %user.id,
            notifications_enabled = user.notifications_enabled,
            has_device_token = user.device_token.is_some(),
            "Preferences updated"
        );

        Ok(UpdatePreferencesResult { user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::domain::user::Registration;
    use crate::ports::UserRepository as _;

    async fn seed_user(users: &InMemoryUserRepository) -> User {
        let registration = Registration {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "s3cret!".to_string(),
            mobile_number: "5551234567".to_string(),
        };
        let user = User::register(UserId::new(), &registration, "hash".to_string());
        users.save(&user).await.unwrap();
        user
    }

    #[tokio::test]
    async fn registers_device_token() {
        let users = Arc::new(InMemoryUserRepository::new());
        let seeded = seed_user(&users).await;

        let handler = UpdatePreferencesHandler::new(users.clone());
        let result = handler
            .handle(UpdatePreferencesCommand {
                user_id: seeded.id,
                device_token: Some("fcm-token-1".to_string()),
                notifications_enabled: None,
            })
            .await
            .unwrap();

        assert_eq!(result.user.device_token.as_deref(), Some("fcm-token-1"));
        assert!(result.user.notifications_enabled);

        let stored = users.find_by_id(&seeded.id).await.unwrap().unwrap();
        assert_eq!(stored.device_token.as_deref(), Some("fcm-token-1"));
    }

    #[tokio::test]
    async fn opting_out_keeps_the_token() {
        let users = Arc::new(InMemoryUserRepository::new());
        let seeded = seed_user(&users).await;
        let handler = UpdatePreferencesHandler::new(users);

        handler
            .handle(UpdatePreferencesCommand {
                user_id: seeded.id,
                device_token: Some("fcm-token-1".to_string()),
                notifications_enabled: None,
            })
            .await
            .unwrap();

        let result = handler
            .handle(UpdatePreferencesCommand {
                user_id: seeded.id,
                device_token: None,
                notifications_enabled: Some(false),
            })
            .await
            .unwrap();

        assert_eq!(result.user.device_token.as_deref(), Some("fcm-token-1"));
        assert!(!result.user.notifications_enabled);
    }

    #[tokio::test]
    async fn unknown_user_fails_with_not_found() {
        let users = Arc::new(InMemoryUserRepository::new());
        let handler = UpdatePreferencesHandler::new(users);

        let err = handler
            .handle(UpdatePreferencesCommand {
                user_id: UserId::new(),
                device_token: None,
                notifications_enabled: Some(true),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::NotFound(_)));
    }
}
