//! Proxy service: request reconstruction and verbatim relay.

use std::sync::Arc;

use palisade_domain::{
    InboundRequest, TENANT_HEADER, UpstreamRequest, VendorEndpoints, VendorResponse,
};

use crate::auth::{TokenError, TokenService};
use crate::ports::{SettingsStore, SettingsStoreError, TransportError, UpstreamTransport};

/// Message sent to the caller when the failure detail must stay server-side.
const GENERIC_FAILURE_MESSAGE: &str = "An internal proxy error occurred.";

/// Proxy-internal failures. Vendor 4xx/5xx responses are not represented
/// here; they relay unchanged through the success path.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// Settings could not be loaded.
    #[error(transparent)]
    Settings(#[from] SettingsStoreError),

    /// A valid access token could not be obtained.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// The vendor API could not be reached.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ProxyError {
    /// The message disclosed to the caller in the 500 envelope.
    ///
    /// Recognized configuration problems keep their message; transport and
    /// backend detail collapses to a generic line, with the full error
    /// retained in logs only.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Settings(SettingsStoreError::Missing)
            | Self::Token(TokenError::ConfigurationMissing | TokenError::MissingCredentials) => {
                self.to_string()
            }
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Forwards inbound requests to the vendor API under fresh credentials.
pub struct ProxyService {
    settings: Arc<dyn SettingsStore>,
    tokens: Arc<TokenService>,
    upstream: Arc<dyn UpstreamTransport>,
    endpoints: VendorEndpoints,
}

impl ProxyService {
    /// Creates a proxy service.
    #[must_use]
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        tokens: Arc<TokenService>,
        upstream: Arc<dyn UpstreamTransport>,
        endpoints: VendorEndpoints,
    ) -> Self {
        Self {
            settings,
            tokens,
            upstream,
            endpoints,
        }
    }

    /// Reconstructs the downstream request, forwards it once, and relays
    /// the vendor's status and body unchanged.
    ///
    /// # Errors
    /// Only proxy-internal failures; a vendor 4xx/5xx is an `Ok` outcome.
    pub async fn relay(&self, request: InboundRequest) -> Result<VendorResponse, ProxyError> {
        let settings = self.settings.load().await?;
        let access_token = self.tokens.access_token().await?;

        let mut upstream = UpstreamRequest::new(
            request.method,
            self.endpoints.api_url(&request.path),
        );
        upstream.query = request.query;
        upstream.body = request.body;
        upstream.headers = vec![
            ("Authorization".to_string(), format!("Bearer {access_token}")),
            (TENANT_HEADER.to_string(), settings.tenant_identifier),
            ("Content-Type".to_string(), "application/json".to_string()),
        ];

        let response = self.upstream.forward(upstream).await?;
        Ok(response)
    }

    /// Edge entry point: like [`Self::relay`], but proxy-internal failures
    /// become the HTTP 500 `{"error": ...}` envelope instead of an `Err`.
    pub async fn respond(&self, request: InboundRequest) -> VendorResponse {
        match self.relay(request).await {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(%error, "proxy relay failed");
                VendorResponse::internal_error(error.client_message())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_problems_keep_their_message() {
        let error = ProxyError::Token(TokenError::ConfigurationMissing);
        assert_eq!(error.client_message(), "vendor API settings not found");

        let error = ProxyError::Settings(SettingsStoreError::Missing);
        assert_eq!(error.client_message(), "vendor API settings not found");
    }

    #[test]
    fn test_transport_detail_is_not_disclosed() {
        let error = ProxyError::Transport(TransportError::Network(
            "connect refused to 10.0.0.8:443".to_string(),
        ));
        assert_eq!(error.client_message(), GENERIC_FAILURE_MESSAGE);

        let error = ProxyError::Settings(SettingsStoreError::Backend(
            "disk read failed: /etc/palisade".to_string(),
        ));
        assert_eq!(error.client_message(), GENERIC_FAILURE_MESSAGE);
    }
}
