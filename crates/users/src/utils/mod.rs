//! Internal utilities for the user domain.

pub mod password;
