//! Random token generation.

use rand::{distributions::Alphanumeric, Rng};

use crate::types::{TokenError, TokenResult};

/// Length of email verification and password reset tokens.
pub const EMAIL_TOKEN_LENGTH: usize = 40;

/// Produces random opaque string tokens of a requested length.
///
/// Consumed abstractly so the randomness source can be substituted in
/// tests.
#[cfg_attr(test, mockall::automock)]
pub trait TokenGenerator: Send + Sync {
    /// Generate a random token of exactly `length` characters.
    fn generate_random(&self, length: usize) -> TokenResult<String>;
}

/// Default generator backed by the thread-local RNG.
#[derive(Debug, Default, Clone)]
pub struct RandomTokenGenerator;

impl RandomTokenGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl TokenGenerator for RandomTokenGenerator {
    fn generate_random(&self, length: usize) -> TokenResult<String> {
        if length == 0 {
            return Err(TokenError::InvalidLength(length));
        }

        let token = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect();

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_tokens_of_requested_length() {
        let generator = RandomTokenGenerator::new();

        let token = generator.generate_random(EMAIL_TOKEN_LENGTH).unwrap();
        assert_eq!(token.len(), EMAIL_TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn consecutive_tokens_differ() {
        let generator = RandomTokenGenerator::new();

        let first = generator.generate_random(EMAIL_TOKEN_LENGTH).unwrap();
        let second = generator.generate_random(EMAIL_TOKEN_LENGTH).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn zero_length_is_rejected() {
        let generator = RandomTokenGenerator::new();

        let result = generator.generate_random(0);
        assert!(matches!(result, Err(TokenError::InvalidLength(0))));
    }
}
