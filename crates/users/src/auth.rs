//! The identity/credential contract the authentication subsystem requires
//! of an account entity.

/// Implemented by entities that can be authenticated against.
///
/// The authentication layer only ever talks to accounts through this trait,
/// so any entity exposing an identifier, a credential hash, and a remember
/// token can be plugged in.
pub trait Authenticatable {
    /// The unique identifier used at login (the email address for users).
    fn auth_identifier(&self) -> &str;

    /// The stored credential hash, if a password has been set.
    fn auth_password_hash(&self) -> Option<&str>;

    /// The long-lived "remember me" token, if one was issued.
    fn remember_token(&self) -> Option<&str>;

    /// Replace or clear the remember token.
    fn set_remember_token(&mut self, token: Option<String>);
}
