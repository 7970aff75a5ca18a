//! Shared types for the user domain.

pub mod errors;

pub use errors::*;

/// Database identifier for users.
pub type UserId = i64;
