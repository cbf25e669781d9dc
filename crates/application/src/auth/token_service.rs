//! Token acquisition with cache reuse.

use std::sync::Arc;

use palisade_domain::CachedToken;

use crate::ports::{Clock, ExchangeError, SettingsStore, SettingsStoreError, TokenExchanger};

use super::TokenCache;

/// Errors on the token path. Inside the proxy these are never surfaced
/// verbatim to the caller; full detail stays in server-side logs.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// The settings document is absent.
    #[error("vendor API settings not found")]
    ConfigurationMissing,

    /// The settings store itself failed.
    #[error("settings store failure: {0}")]
    Store(String),

    /// The settings document has no usable client credentials.
    #[error("missing clientId or clientSecret in settings")]
    MissingCredentials,

    /// The exchange with the vendor token endpoint failed. Nothing is
    /// cached in this case.
    #[error("token acquisition failed: {0}")]
    AcquisitionFailed(#[source] ExchangeError),
}

impl From<SettingsStoreError> for TokenError {
    fn from(error: SettingsStoreError) -> Self {
        match error {
            SettingsStoreError::Missing => Self::ConfigurationMissing,
            SettingsStoreError::Backend(message) => Self::Store(message),
        }
    }
}

/// Obtains vendor access tokens, reusing the cached one whenever it is
/// still live.
///
/// The hot path — cache hit — does no I/O at all. On a miss the service
/// loads settings, runs one client-credentials exchange, and overwrites the
/// cache slot. Concurrent refreshes may race; the exchange is idempotent
/// per credentials, so last-write-wins is correct.
pub struct TokenService {
    clock: Arc<dyn Clock>,
    settings: Arc<dyn SettingsStore>,
    exchanger: Arc<dyn TokenExchanger>,
    cache: TokenCache,
}

impl TokenService {
    /// Creates a token service with an empty cache.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        settings: Arc<dyn SettingsStore>,
        exchanger: Arc<dyn TokenExchanger>,
    ) -> Self {
        Self {
            clock,
            settings,
            exchanger,
            cache: TokenCache::new(),
        }
    }

    /// Returns a currently valid access token.
    ///
    /// # Errors
    /// See [`TokenError`]; a failed refresh never caches a partial value.
    pub async fn access_token(&self) -> Result<String, TokenError> {
        let now = self.clock.now();
        if let Some(token) = self.cache.live(now).await {
            return Ok(token.access_token);
        }

        let settings = self.settings.load().await?;
        let Some(credentials) = settings.credentials() else {
            return Err(TokenError::MissingCredentials);
        };

        let grant = self
            .exchanger
            .exchange(&credentials)
            .await
            .map_err(TokenError::AcquisitionFailed)?;

        let token = CachedToken::from_grant(now, &grant);
        tracing::info!(expires_at = %token.expires_at, "acquired new vendor access token");
        let access_token = token.access_token.clone();
        self.cache.put(token).await;

        Ok(access_token)
    }
}
