//! Error types for the user domain.

use thiserror::Error;

/// User-related errors
#[derive(Debug, Error, Clone)]
pub enum UserError {
    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Password hashing failed")]
    PasswordHashingFailed,

    #[error("Invalid password hash")]
    InvalidPasswordHash,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Notification dispatch failed: {0}")]
    NotificationFailed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Token generation errors
#[derive(Debug, Error, Clone)]
pub enum TokenError {
    #[error("Token generation failed: {0}")]
    GenerationFailed(String),

    #[error("Invalid token length: {0}")]
    InvalidLength(usize),
}

/// Notification delivery errors
#[derive(Debug, Error, Clone)]
pub enum NotificationError {
    #[error("Notification delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Result types for user domain operations
pub type UserResult<T> = Result<T, UserError>;
pub type TokenResult<T> = Result<T, TokenError>;
pub type NotificationResult<T> = Result<T, NotificationError>;

/// Convert database errors to our error types
impl From<sqlx::Error> for UserError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => UserError::UserNotFound,
            sqlx::Error::Database(db_err) => {
                if db_err.message().contains("UNIQUE constraint failed") {
                    if db_err.message().contains("email") {
                        UserError::EmailAlreadyExists
                    } else {
                        UserError::UserAlreadyExists
                    }
                } else {
                    UserError::DatabaseError(db_err.message().to_string())
                }
            }
            _ => UserError::DatabaseError(err.to_string()),
        }
    }
}

impl From<TokenError> for UserError {
    fn from(err: TokenError) -> Self {
        UserError::TokenGenerationFailed(err.to_string())
    }
}

impl From<NotificationError> for UserError {
    fn from(err: NotificationError) -> Self {
        UserError::NotificationFailed(err.to_string())
    }
}
