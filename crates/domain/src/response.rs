//! Vendor response types
//!
//! A downstream response is relayed verbatim: any status the vendor returns
//! is a valid outcome, so 4xx/5xx live on the success path. Only transport
//! failures take the error branch, and those are modeled by the transport
//! port, not here.

use serde::{Deserialize, Serialize};

/// HTTP status code with semantic helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// Internal server error, used for the proxy's own failure envelope.
    pub const INTERNAL_SERVER_ERROR: Self = Self(500);

    /// Creates a new `StatusCode`.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Returns true if this is a 2xx success status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Returns true if this is any error status (4xx or 5xx).
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.0 >= 400 && self.0 < 600
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// A response received from the vendor API, relayed to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorResponse {
    /// The status code exactly as the vendor returned it.
    pub status: StatusCode,
    /// The body exactly as the vendor returned it.
    pub body: Vec<u8>,
}

/// Body shape of the proxy's own failure envelope.
#[derive(Debug, Serialize, Deserialize)]
struct ErrorBody {
    error: String,
}

impl VendorResponse {
    /// Creates a response from a raw status and body.
    #[must_use]
    pub fn new(status: impl Into<StatusCode>, body: Vec<u8>) -> Self {
        Self {
            status: status.into(),
            body,
        }
    }

    /// Builds the proxy-internal failure envelope: HTTP 500 with
    /// `{"error": <message>}`.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        let body = serde_json::to_vec(&ErrorBody {
            error: message.into(),
        })
        .unwrap_or_default();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body,
        }
    }

    /// Interprets the body as UTF-8 for logging and assertions.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_classes() {
        assert!(StatusCode::new(204).is_success());
        assert!(!StatusCode::new(404).is_success());
        assert!(StatusCode::new(404).is_error());
        assert!(StatusCode::new(500).is_error());
        assert!(!StatusCode::new(302).is_error());
    }

    #[test]
    fn test_internal_error_envelope() {
        let response = VendorResponse::internal_error("vendor API settings not found");
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.body_text(),
            r#"{"error":"vendor API settings not found"}"#
        );
    }
}
