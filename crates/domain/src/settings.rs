//! Vendor settings document.

use serde::{Deserialize, Serialize};

/// Vendor API settings as stored in the configuration document.
///
/// The document is owned by the configuration store and read-only to the
/// core. Field names match the stored JSON (`clientId`, `clientSecret`,
/// `tenantIdentifier`); fields absent from the document deserialize to empty
/// strings so that missing credentials are detected at use, not at parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VendorSettings {
    /// OAuth client identifier for the vendor token endpoint.
    #[serde(default)]
    pub client_id: String,
    /// OAuth client secret for the vendor token endpoint.
    #[serde(default)]
    pub client_secret: String,
    /// Tenant identifier, sent on every forwarded request.
    #[serde(default)]
    pub tenant_identifier: String,
}

impl VendorSettings {
    /// Returns the client credentials, or `None` if either half is blank.
    #[must_use]
    pub fn credentials(&self) -> Option<ClientCredentials> {
        if self.client_id.is_empty() || self.client_secret.is_empty() {
            return None;
        }
        Some(ClientCredentials {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
        })
    }
}

/// Client credentials extracted from [`VendorSettings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    /// OAuth client identifier.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
}
