//! Authentication capability consumed by admin flows.
//!
//! The provider itself (password store, SSO, directory service) is an
//! external collaborator; this module defines the contract and the login
//! form's field validation. Tests use a hand-written double.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::{ValidationError, require_present};

/// Login form credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account name.
    pub username: String,
    /// Plaintext password as typed; never stored here.
    pub password: String,
}

impl Credentials {
    /// Create credentials from form input.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Presence validation; run before consulting the provider.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        require_present(&mut errors, "username", &self.username);
        require_present(&mut errors, "password", &self.password);
        errors
    }
}

/// Error from an authentication backend.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The provider could not be reached.
    #[error("auth provider unavailable: {0}")]
    Unavailable(String),
}

/// Capability that checks credentials against an external identity store.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Whether `credentials` identify a known admin user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the backend cannot answer; a plain wrong
    /// password is `Ok(false)`, not an error.
    async fn authenticate(&self, credentials: &Credentials) -> Result<bool, AuthError>;
}
