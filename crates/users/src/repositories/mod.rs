//! Data access layer for the user domain.

pub mod memory;
pub mod user_repository;

pub use memory::InMemoryUserRepository;
pub use user_repository::{SqliteUserRepository, UserStore};
