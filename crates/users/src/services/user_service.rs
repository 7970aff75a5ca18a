//! User service for managing account operations.

use std::sync::Arc;

use tracing::{info, warn};

use crate::entities::{Notification, User};
use crate::repositories::UserStore;
use crate::types::{UserError, UserId, UserResult};
use crate::utils::password;

use super::dispatch::NotificationDispatcher;
use super::token::{TokenGenerator, EMAIL_TOKEN_LENGTH};

/// Request to create a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
    pub avatar: Option<String>,
}

/// Request to update a user
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub avatar: Option<String>,
}

/// Service for managing user operations.
///
/// Generic over the store and the notification dispatcher; the token
/// generator is injected as a trait object so it can be swapped for a mock.
pub struct UserService<R, D> {
    users: R,
    tokens: Arc<dyn TokenGenerator>,
    notifications: D,
}

impl<R, D> UserService<R, D>
where
    R: UserStore,
    D: NotificationDispatcher,
{
    pub fn new(users: R, tokens: Arc<dyn TokenGenerator>, notifications: D) -> Self {
        Self {
            users,
            tokens,
            notifications,
        }
    }

    /// Get a user by ID
    pub async fn get_user(&self, user_id: UserId) -> UserResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::UserNotFound)
    }

    /// Get a user by email
    pub async fn get_user_by_email(&self, email: &str) -> UserResult<Option<User>> {
        self.users.find_by_email(email).await
    }

    /// Create a new user
    pub async fn create_user(&self, request: CreateUserRequest) -> UserResult<User> {
        let mut user = User::new(request.name, request.email);
        user.avatar = request.avatar;

        user.validate().map_err(UserError::ValidationFailed)?;

        if self.users.email_exists(&user.email).await? {
            return Err(UserError::EmailAlreadyExists);
        }

        if let Some(ref plain) = request.password {
            user.password_hash = Some(password::hash_password(plain)?);
        }

        let user = self.users.create(&user).await?;

        info!(user = %user.email, id = user.id, "created new user");
        Ok(user)
    }

    /// Update a user's profile fields
    pub async fn update_user(&self, user_id: UserId, request: UpdateUserRequest) -> UserResult<User> {
        let mut user = self.get_user(user_id).await?;

        if let Some(name) = request.name {
            user.name = name;
        }
        if let Some(avatar) = request.avatar {
            user.avatar = Some(avatar);
        }

        user.validate().map_err(UserError::ValidationFailed)?;
        user.touch();
        self.users.save(&user).await?;

        info!(user = %user.email, id = user.id, "updated user");
        Ok(user)
    }

    /// Set or clear the two-factor authentication secret
    pub async fn set_two_factor_secret(
        &self,
        user_id: UserId,
        secret: Option<String>,
    ) -> UserResult<User> {
        let mut user = self.get_user(user_id).await?;
        user.google2fa_secret = secret;
        user.touch();
        self.users.save(&user).await?;

        info!(
            user = %user.email,
            enabled = user.has_two_factor_authentication(),
            "two-factor authentication changed"
        );
        Ok(user)
    }

    /// Delete a user
    pub async fn delete_user(&self, user_id: UserId) -> UserResult<()> {
        let user = self.get_user(user_id).await?;
        self.users.delete(user_id).await?;

        warn!(user = %user.email, id = user_id, "deleted user");
        Ok(())
    }

    /// Issue a fresh email verification token for the user.
    ///
    /// Asks the injected generator for a 40-character random token, persists
    /// it on the user, and returns it. Generator and persistence failures
    /// both propagate.
    pub async fn request_email_token(&self, user_id: UserId) -> UserResult<String> {
        let mut user = self.get_user(user_id).await?;

        let token = self.tokens.generate_random(EMAIL_TOKEN_LENGTH)?;
        user.email_token = Some(token.clone());
        user.touch();
        self.users.save(&user).await?;

        info!(user = %user.email, "issued email verification token");
        Ok(token)
    }

    /// Dispatch a password-reset notification carrying `token` to the user.
    pub async fn send_password_reset(&self, user: &User, token: &str) -> UserResult<()> {
        self.notifications
            .dispatch(user, Notification::password_reset(token))
            .await?;

        info!(user = %user.email, "password reset notification sent");
        Ok(())
    }

    /// Verify a plaintext password against the user's stored hash
    pub async fn verify_password(&self, user: &User, plain: &str) -> UserResult<bool> {
        match user.password_hash {
            Some(ref hash) => password::verify_password(plain, hash),
            None => Ok(false),
        }
    }
}
