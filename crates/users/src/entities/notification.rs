use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A notification addressed to a single user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    /// Notification type
    pub kind: NotificationKind,
    /// Subject line shown to the recipient
    pub subject: String,
    /// Token carried by token-bearing notifications
    pub token: Option<String>,
    /// Creation timestamp
    pub created_at: String,
}

/// Notification type enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    PasswordReset,
    EmailVerification,
}

impl Notification {
    /// A password-reset notification carrying the reset token.
    pub fn password_reset(token: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::PasswordReset,
            subject: "Reset your password".to_string(),
            token: Some(token.into()),
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// An email-verification notification carrying the verification token.
    pub fn email_verification(token: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::EmailVerification,
            subject: "Confirm your email address".to_string(),
            token: Some(token.into()),
            created_at: Utc::now().to_rfc3339(),
        }
    }
}
