//! Caller identity and user-management types.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Role string that marks a user record as administrative.
pub const ADMIN_ROLE: &str = "admin";

/// A verified caller identity, sourced from the authenticated request
/// context. Never mutated by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// The caller's unique identifier.
    pub uid: String,
}

impl Caller {
    /// Creates a caller identity.
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into() }
    }
}

/// A record from the user store, keyed by uid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserRecord {
    /// The user's role, empty when none has been assigned.
    #[serde(default)]
    pub role: String,
}

impl UserRecord {
    /// Returns true if this record grants administrative rights.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Caller-supplied deletion payload. Validated before use, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionRequest {
    /// Identifier of the account to delete.
    pub uid: String,
}

impl DeletionRequest {
    /// Creates a deletion request for the given target.
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into() }
    }

    /// Checks the target identifier is usable.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidIdentifier`] when the target is empty.
    pub fn validate(&self) -> DomainResult<()> {
        if self.uid.is_empty() {
            return Err(DomainError::InvalidIdentifier(
                "deletion target uid is empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Terminal success outcome of a deletion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionReceipt {
    /// Always true; failures are reported as typed errors instead.
    pub success: bool,
}

impl DeletionReceipt {
    /// Creates the success receipt.
    #[must_use]
    pub const fn new() -> Self {
        Self { success: true }
    }
}

impl Default for DeletionReceipt {
    fn default() -> Self {
        Self::new()
    }
}
