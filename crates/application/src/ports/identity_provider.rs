//! Identity provider port
//!
//! Defines the destructive account operation against the identity provider.

use async_trait::async_trait;

/// Errors surfaced by the identity provider.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The provider refused the operation (including deleting an account
    /// that no longer exists — double deletion is surfaced, not swallowed).
    #[error("identity provider rejected the request: {0}")]
    Rejected(String),

    /// The provider could not be reached.
    #[error("identity provider unreachable: {0}")]
    Network(String),
}

/// Account management against the identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Deletes the account with the given identifier.
    ///
    /// # Errors
    /// [`IdentityError::Rejected`] on provider refusal,
    /// [`IdentityError::Network`] on transport failure.
    async fn delete_account(&self, uid: &str) -> Result<(), IdentityError>;
}
