//! # Slipway Users Crate
//!
//! User accounts for the Slipway deployment platform: the `User` entity,
//! the authentication contract it satisfies, presenter views, token
//! generation, and password-reset notification dispatch.
//!
//! ## Architecture
//!
//! - **Entities**: domain models (`User`, `Notification`)
//! - **Presenters**: read-only view wrappers (`UserPresenter`)
//! - **Repositories**: the `UserStore` boundary with SQLite and in-memory
//!   implementations
//! - **Services**: business logic (`UserService`, token generation,
//!   notification dispatch)
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use slipway_users::repositories::InMemoryUserRepository;
//! use slipway_users::services::{
//!     CreateUserRequest, RandomTokenGenerator, TracingDispatcher, UserService,
//! };
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let service = UserService::new(
//!     InMemoryUserRepository::new(),
//!     Arc::new(RandomTokenGenerator::new()),
//!     TracingDispatcher::new(slipway_config::current().notifications.clone()),
//! );
//!
//! let user = service
//!     .create_user(CreateUserRequest {
//!         name: "Admin".to_string(),
//!         email: "admin@example.com".to_string(),
//!         password: Some("a-strong-password".to_string()),
//!         avatar: None,
//!     })
//!     .await?;
//!
//! let token = service.request_email_token(user.id).await?;
//! service.send_password_reset(&user, &token).await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod db;
pub mod entities;
pub mod presenters;
pub mod repositories;
pub mod services;
pub mod types;
pub mod utils;

pub use auth::Authenticatable;
pub use entities::{Notification, NotificationKind, User};
pub use presenters::{Presentable, UserPresenter};
pub use repositories::{InMemoryUserRepository, SqliteUserRepository, UserStore};
pub use services::{
    CreateUserRequest, NotificationDispatcher, RandomTokenGenerator, RecordingDispatcher,
    TokenGenerator, TracingDispatcher, UpdateUserRequest, UserService, EMAIL_TOKEN_LENGTH,
};
pub use types::{NotificationError, TokenError, UserError, UserId, UserResult};
