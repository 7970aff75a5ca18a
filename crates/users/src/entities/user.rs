use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::auth::Authenticatable;
use crate::types::UserId;

/// Represents a user account on the deployment platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Database primary key, 0 until persisted
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Email address, the unique login and notification identifier
    pub email: String,
    /// Argon2 password hash
    pub password_hash: Option<String>,
    /// Relative path to the stored avatar image, e.g. `/an/image.jpg`
    pub avatar: Option<String>,
    /// Two-factor authentication secret; presence enables the feature
    pub google2fa_secret: Option<String>,
    /// Last issued email verification token
    pub email_token: Option<String>,
    /// Long-lived "remember me" session token
    pub remember_token: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl User {
    /// Create a new, not yet persisted user.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
            password_hash: None,
            avatar: None,
            google2fa_secret: None,
            email_token: None,
            remember_token: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Absolute URL of the user's avatar.
    ///
    /// Derived on every read from the configured application URL and the
    /// stored relative path; never persisted.
    pub fn avatar_url(&self) -> Option<String> {
        let base = &slipway_config::current().app.url;
        self.avatar
            .as_ref()
            .map(|avatar| format!("{}{}", base, avatar))
    }

    /// Whether two-factor authentication is enabled.
    ///
    /// Purely a function of the stored secret: true iff it is set and
    /// non-empty.
    pub fn has_two_factor_authentication(&self) -> bool {
        self.google2fa_secret
            .as_deref()
            .map_or(false, |secret| !secret.is_empty())
    }

    /// Update the timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().to_rfc3339();
    }

    /// Validate user data
    pub fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() {
            return Err("Email cannot be empty".to_string());
        }

        if !self.email.contains('@') || !self.email.contains('.') {
            return Err("Invalid email format".to_string());
        }

        if self.email.len() > 255 {
            return Err("Email too long (max 255 characters)".to_string());
        }

        if self.name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }

        if self.name.len() > 100 {
            return Err("Name too long (max 100 characters)".to_string());
        }

        if let Some(ref avatar) = self.avatar {
            if !avatar.starts_with('/') {
                return Err("Avatar must be a relative path".to_string());
            }
        }

        Ok(())
    }
}

impl Authenticatable for User {
    fn auth_identifier(&self) -> &str {
        &self.email
    }

    fn auth_password_hash(&self) -> Option<&str> {
        self.password_hash.as_deref()
    }

    fn remember_token(&self) -> Option<&str> {
        self.remember_token.as_deref()
    }

    fn set_remember_token(&mut self, token: Option<String>) {
        self.remember_token = token;
    }
}
