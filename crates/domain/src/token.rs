//! Access token types with expiry tracking.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Seconds subtracted from the vendor-declared lifetime when computing the
/// cached expiry instant. The cache is never read at or past that instant,
/// so a token is always retired at least this long before the vendor would
/// actually reject it.
pub const EXPIRY_SAFETY_MARGIN_SECS: i64 = 60;

/// Success response of the vendor token endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenGrant {
    /// The issued access token.
    pub access_token: String,
    /// Declared lifetime in seconds from issuance.
    pub expires_in: u64,
}

/// An access token together with the instant past which it must not be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedToken {
    /// The bearer token value.
    pub access_token: String,
    /// Issuance instant + (declared lifetime − safety margin).
    pub expires_at: DateTime<Utc>,
}

impl CachedToken {
    /// Builds a cached token from a grant issued at `now`, applying the
    /// safety margin.
    #[must_use]
    pub fn from_grant(now: DateTime<Utc>, grant: &TokenGrant) -> Self {
        let usable = grant.expires_in.cast_signed() - EXPIRY_SAFETY_MARGIN_SECS;
        Self {
            access_token: grant.access_token.clone(),
            expires_at: now + Duration::seconds(usable),
        }
    }

    /// Returns true if the token may still be served at `now`.
    ///
    /// The comparison is strict: a token is already dead at its expiry
    /// instant.
    #[must_use]
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}
