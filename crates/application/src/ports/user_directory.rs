//! User directory port
//!
//! Defines role lookups against the user-record store.

use async_trait::async_trait;
use palisade_domain::UserRecord;

/// Errors that can occur while reading the user-record store.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The store could not be read or a record could not be decoded.
    #[error("user record store failure: {0}")]
    Backend(String),
}

/// Read access to user records, keyed by identifier.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Looks up a user record. `Ok(None)` means no record exists for the
    /// identifier, which callers treat as "no role granted".
    ///
    /// # Errors
    /// [`DirectoryError::Backend`] on store failures.
    async fn find(&self, uid: &str) -> Result<Option<UserRecord>, DirectoryError>;
}
