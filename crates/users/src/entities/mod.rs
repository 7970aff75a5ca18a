//! Domain entities for the user system.
//!
//! Pure data models without persistence or API concerns. Derived
//! attributes (`avatar_url`, `has_two_factor_authentication`) are computed
//! on read and never stored.

pub mod notification;
pub mod user;

pub use notification::{Notification, NotificationKind};
pub use user::User;
