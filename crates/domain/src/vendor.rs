//! Vendor endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Scope requested with every client-credentials exchange.
pub const PUBLIC_API_SCOPE: &str = "PublicApi.Access";

/// Header carrying the tenant identifier on forwarded requests.
pub const TENANT_HEADER: &str = "Retailer";

const DEFAULT_TOKEN_URL: &str = "https://id.kiotviet.vn/connect/token";
const DEFAULT_API_ORIGIN: &str = "https://public.kiotapi.com";

/// The vendor's fixed endpoints.
///
/// Production uses the defaults; tests point both at a local stand-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorEndpoints {
    /// Token endpoint accepting the client-credentials exchange.
    pub token_url: String,
    /// Base origin under which the vendor's REST surface lives.
    pub api_origin: String,
}

impl VendorEndpoints {
    /// Creates endpoints with explicit URLs.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidUrl`] if either URL does not parse.
    pub fn new(token_url: impl Into<String>, api_origin: impl Into<String>) -> DomainResult<Self> {
        let token_url = token_url.into();
        let api_origin = api_origin.into();
        for candidate in [&token_url, &api_origin] {
            url::Url::parse(candidate)
                .map_err(|e| DomainError::InvalidUrl(format!("{e}: {candidate}")))?;
        }
        Ok(Self {
            token_url,
            api_origin,
        })
    }

    /// Joins the API origin with an inbound path.
    ///
    /// The path arrives with its leading slash and is appended verbatim;
    /// query parameters are deliberately not part of the result.
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_origin.trim_end_matches('/'))
    }
}

impl Default for VendorEndpoints {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_origin: DEFAULT_API_ORIGIN.to_string(),
        }
    }
}
