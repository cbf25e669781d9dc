//! Single-slot access-token cache.
//!
//! Exactly one cached token exists per gateway process. The slot is
//! replaced as a unit on every successful refresh, so readers never see a
//! token paired with a foreign expiry. A lost update between concurrent
//! refreshers costs one extra exchange, never a wrong token.

use chrono::{DateTime, Utc};
use palisade_domain::CachedToken;
use tokio::sync::RwLock;

/// Thread-safe single-slot cache for the current vendor access token.
///
/// Constructed once per process and handed to the [`super::TokenService`];
/// there is no module-level singleton.
#[derive(Debug, Default)]
pub struct TokenCache {
    slot: RwLock<Option<CachedToken>>,
}

impl TokenCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Returns the cached token if it is still live at `now`.
    pub async fn live(&self, now: DateTime<Utc>) -> Option<CachedToken> {
        let slot = self.slot.read().await;
        slot.as_ref().filter(|t| t.is_live_at(now)).cloned()
    }

    /// Replaces the slot with a freshly acquired token.
    pub async fn put(&self, token: CachedToken) {
        let mut slot = self.slot.write().await;
        *slot = Some(token);
    }

    /// Empties the slot.
    pub async fn clear(&self) {
        let mut slot = self.slot.write().await;
        *slot = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Duration;
    use palisade_domain::TokenGrant;
    use pretty_assertions::assert_eq;

    fn token_at(now: DateTime<Utc>, expires_in: u64) -> CachedToken {
        CachedToken::from_grant(
            now,
            &TokenGrant {
                access_token: "tok-1".to_string(),
                expires_in,
            },
        )
    }

    #[tokio::test]
    async fn test_empty_cache_has_no_live_token() {
        let cache = TokenCache::new();
        assert!(cache.live(Utc::now()).await.is_none());
    }

    #[tokio::test]
    async fn test_live_token_is_served_until_expiry() {
        let now = Utc::now();
        let cache = TokenCache::new();
        cache.put(token_at(now, 3600)).await;

        let served = cache.live(now).await.unwrap();
        assert_eq!(served.access_token, "tok-1");

        // Dead exactly at the margin-adjusted instant.
        assert!(cache.live(now + Duration::seconds(3540)).await.is_none());
    }

    #[tokio::test]
    async fn test_put_replaces_the_slot_as_a_unit() {
        let now = Utc::now();
        let cache = TokenCache::new();
        cache.put(token_at(now, 3600)).await;

        let replacement = CachedToken::from_grant(
            now,
            &TokenGrant {
                access_token: "tok-2".to_string(),
                expires_in: 7200,
            },
        );
        cache.put(replacement.clone()).await;

        assert_eq!(cache.live(now).await.unwrap(), replacement);
    }

    #[tokio::test]
    async fn test_clear_empties_the_slot() {
        let now = Utc::now();
        let cache = TokenCache::new();
        cache.put(token_at(now, 3600)).await;
        cache.clear().await;
        assert!(cache.live(now).await.is_none());
    }
}
