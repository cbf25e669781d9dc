//! Token exchanger port
//!
//! Defines the interface to the vendor's token endpoint.

use async_trait::async_trait;
use palisade_domain::{ClientCredentials, TokenGrant};

/// Errors that can occur during a credentials-for-token exchange.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    /// The token endpoint answered with a non-2xx status.
    #[error("token endpoint rejected the exchange (HTTP {status}): {message}")]
    Rejected {
        /// Status code returned by the token endpoint.
        status: u16,
        /// Response body, as close to verbatim as it could be read.
        message: String,
    },

    /// The token endpoint could not be reached or its response not read.
    #[error("token endpoint unreachable: {0}")]
    Network(String),
}

/// Exchanges stored client credentials for a fresh access token.
///
/// The exchange is idempotent per credentials, so concurrent duplicate
/// exchanges are wasteful but harmless.
#[async_trait]
pub trait TokenExchanger: Send + Sync {
    /// Performs one client-credentials exchange.
    ///
    /// # Errors
    /// [`ExchangeError::Rejected`] on a vendor refusal,
    /// [`ExchangeError::Network`] on transport failure.
    async fn exchange(&self, credentials: &ClientCredentials) -> Result<TokenGrant, ExchangeError>;
}
