//! Delete-user use case.
//!
//! A single invocation walks an ordered guard chain — authentication, input
//! shape, self-targeting, role — and only then touches the identity
//! provider. The order is load-bearing: each check is cheaper than the next
//! and must not leak information (role is never consulted before
//! authentication is established).

use palisade_domain::{Caller, DeletionReceipt, DeletionRequest};

use crate::ports::{IdentityProvider, UserDirectory};

/// Terminal error outcomes of a deletion call. Unlike proxy failures these
/// are surfaced to the caller with their specific kind, so "not logged in"
/// stays distinguishable from "not permitted" and "bad input".
#[derive(Debug, thiserror::Error)]
pub enum DeletionError {
    /// No verified caller identity was attached to the call.
    #[error("authentication is required for this action")]
    Unauthenticated,

    /// The target identifier failed validation.
    #[error("invalid deletion target: {0}")]
    InvalidArgument(String),

    /// The caller is authenticated but not allowed to perform the action.
    #[error("{0}")]
    PermissionDenied(String),

    /// Any failure not covered by the kinds above, with provider detail
    /// kept out of the caller-facing message.
    #[error("internal server error")]
    Internal {
        /// Underlying failure, for logs only.
        detail: String,
    },
}

impl DeletionError {
    /// Stable wire code for the structured error response.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::InvalidArgument(_) => "invalid-argument",
            Self::PermissionDenied(_) => "permission-denied",
            Self::Internal { .. } => "internal",
        }
    }
}

/// Input for a deletion call: the authenticated caller context (absent when
/// the platform could not verify one) and the caller-supplied payload.
#[derive(Debug, Clone)]
pub struct DeleteUserInput {
    /// Verified caller identity, if any.
    pub caller: Option<Caller>,
    /// The deletion payload.
    pub request: DeletionRequest,
}

/// Use case for deleting a user account, gated on administrative role.
pub struct DeleteUser<D: UserDirectory, P: IdentityProvider> {
    directory: D,
    provider: P,
}

impl<D: UserDirectory, P: IdentityProvider> DeleteUser<D, P> {
    /// Creates a new `DeleteUser` use case.
    #[must_use]
    pub const fn new(directory: D, provider: P) -> Self {
        Self {
            directory,
            provider,
        }
    }

    /// Runs the guard chain and, if every guard passes, deletes the target
    /// account.
    ///
    /// # Errors
    /// The first unmet precondition wins; see [`DeletionError`].
    pub async fn execute(&self, input: DeleteUserInput) -> Result<DeletionReceipt, DeletionError> {
        let Some(caller) = input.caller else {
            tracing::warn!("unauthenticated deletion attempt");
            return Err(DeletionError::Unauthenticated);
        };

        if let Err(error) = input.request.validate() {
            tracing::warn!(caller = %caller.uid, %error, "deletion target rejected");
            return Err(DeletionError::InvalidArgument(error.to_string()));
        }
        let target = &input.request.uid;

        if caller.uid == *target {
            tracing::warn!(caller = %caller.uid, "administrator attempted self-deletion");
            return Err(DeletionError::PermissionDenied(
                "administrators may not delete their own account".to_string(),
            ));
        }

        let record = self
            .directory
            .find(&caller.uid)
            .await
            .map_err(|e| DeletionError::Internal {
                detail: e.to_string(),
            })?;
        if !record.is_some_and(|r| r.is_admin()) {
            tracing::warn!(caller = %caller.uid, "caller lacks administrative role");
            return Err(DeletionError::PermissionDenied(
                "only administrators may perform this action".to_string(),
            ));
        }

        self.provider
            .delete_account(target)
            .await
            .map_err(|e| DeletionError::Internal {
                detail: e.to_string(),
            })?;

        tracing::info!(caller = %caller.uid, target = %target, "user account deleted");
        Ok(DeletionReceipt::new())
    }
}
