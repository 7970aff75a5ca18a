//! Business logic for the user domain.

pub mod dispatch;
pub mod token;
pub mod user_service;

pub use dispatch::{
    NotificationDispatcher, RecordingDispatcher, SentNotification, TracingDispatcher,
};
pub use token::{RandomTokenGenerator, TokenGenerator, EMAIL_TOKEN_LENGTH};
pub use user_service::{CreateUserRequest, UpdateUserRequest, UserService};
