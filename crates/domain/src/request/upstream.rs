//! Upstream request shape.

use serde_json::Value;

use super::HttpMethod;

/// A fully assembled request ready to be forwarded to the vendor API.
///
/// Built by the proxy from an [`super::InboundRequest`] plus the resolved
/// credentials; consumed by the upstream transport adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamRequest {
    /// The HTTP method, carried over from the inbound request.
    pub method: HttpMethod,
    /// Absolute URL: vendor origin + inbound path.
    pub url: String,
    /// Query parameters, passed through as parameters rather than
    /// re-encoded into `url`.
    pub query: Vec<(String, String)>,
    /// Headers to attach (authorization, tenant, content type).
    pub headers: Vec<(String, String)>,
    /// JSON body, carried over from the inbound request.
    pub body: Option<Value>,
}

impl UpstreamRequest {
    /// Creates a bare upstream request for the given method and URL.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Returns the value of a header, if present (name compared
    /// case-insensitively).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut request = UpstreamRequest::new(HttpMethod::Get, "https://vendor.test/items");
        request
            .headers
            .push(("Authorization".into(), "Bearer abc".into()));

        assert_eq!(request.header("authorization"), Some("Bearer abc"));
        assert_eq!(request.header("Retailer"), None);
    }
}
