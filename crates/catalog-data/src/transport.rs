//! HTTP transport seam.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::FetchError;

/// A raw HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a new response.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        http::StatusCode::from_u16(self.status)
            .map(|s| s.is_success())
            .unwrap_or(false)
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(FetchError::from)
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self, url: &str) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FetchError::Http {
                status: self.status,
                url: url.to_string(),
            })
        }
    }
}

/// Performs HTTP GET requests.
///
/// Browser transports wrap JS promises, so futures are not `Send`.
#[async_trait(?Send)]
pub trait HttpTransport {
    /// Fetch `url` and return the full response. Non-2xx statuses are
    /// returned as responses, not errors.
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(199, "").is_success());
        assert!(!HttpResponse::new(404, "").is_success());
        assert!(!HttpResponse::new(0, "").is_success());
    }

    #[test]
    fn test_error_for_status() {
        let err = HttpResponse::new(503, "busy")
            .error_for_status("/api/products")
            .unwrap_err();
        assert_eq!(err.status(), Some(503));

        assert!(HttpResponse::new(200, "{}").error_for_status("/x").is_ok());
    }

    #[test]
    fn test_json_decode_failure() {
        let err = HttpResponse::new(200, "<html>")
            .json::<serde_json::Value>()
            .unwrap_err();
        assert_eq!(err.kind(), "decode");
    }
}
