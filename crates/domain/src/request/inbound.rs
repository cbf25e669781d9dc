//! Inbound request shape.
//!
//! The hosting platform parses the raw HTTP request and hands the core this
//! shape; the core never touches the wire representation directly.

use serde_json::Value;

use super::HttpMethod;

/// A parsed inbound request as delivered by the hosting platform.
///
/// `path` is the segment after the gateway's mount point and is forwarded
/// verbatim into the vendor API's path space. Query parameters are kept as
/// pairs so they can be re-attached downstream without re-encoding them into
/// the path.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundRequest {
    /// The HTTP method of the inbound request.
    pub method: HttpMethod,
    /// Path to forward, including the leading slash.
    pub path: String,
    /// Query parameters in arrival order.
    pub query: Vec<(String, String)>,
    /// Parsed JSON body, if the request carried one.
    pub body: Option<Value>,
}

impl InboundRequest {
    /// Creates a request with no query parameters and no body.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Attaches a query parameter.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_accumulates_query() {
        let request = InboundRequest::new(HttpMethod::Get, "/products")
            .with_query("pageSize", "50")
            .with_query("currentItem", "0");

        assert_eq!(request.query.len(), 2);
        assert_eq!(request.query[0], ("pageSize".into(), "50".into()));
    }

    #[test]
    fn test_builder_attaches_body() {
        let request =
            InboundRequest::new(HttpMethod::Post, "/orders").with_body(json!({"total": 12}));
        assert!(request.body.is_some());
    }
}
