//! Upstream transport port
//!
//! Defines the interface for forwarding a request to the vendor API.

use async_trait::async_trait;
use palisade_domain::{UpstreamRequest, VendorResponse};

/// Failures to reach the vendor or to read its response.
///
/// A vendor status code is never a `TransportError`: 4xx/5xx responses come
/// back as `Ok(VendorResponse)` so the relay contract stays explicit at the
/// type level.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The assembled upstream URL did not parse.
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(String),

    /// Connection, TLS, timeout, or body-read failure.
    #[error("network failure: {0}")]
    Network(String),
}

/// Forwards an assembled request to the vendor API.
#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    /// Sends the request and returns whatever the vendor answered,
    /// regardless of status class.
    ///
    /// # Errors
    /// Only transport-level failures; never vendor status codes.
    async fn forward(&self, request: UpstreamRequest) -> Result<VendorResponse, TransportError>;
}
