//! # API errors
//!
//! Every call in this crate returns [`ApiError`]. The UI never needs more than
//! one question answered: *is there a message from the server worth showing?*
//! [`ApiError::user_message`] answers it. The services are FastAPI apps, so a
//! rejected request carries `{"detail": "..."}`; a string detail is shown
//! verbatim and anything else (validation arrays, empty bodies, transport
//! failures, unparseable responses) is replaced by the caller's fallback text.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The service answered with a non-success status.
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not what the endpoint promises.
    #[error("unexpected response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl ApiError {
    /// Build a status error from a response body, keeping `detail` only when
    /// it is a plain string.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| match b.detail {
                serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
                _ => None,
            });
        ApiError::Status { status, detail }
    }

    /// The server's detail message, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }

    /// `true` for 404 responses.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail_is_shown() {
        let err = ApiError::from_status(404, r#"{"detail":"Weight record not found"}"#);
        assert!(err.is_not_found());
        assert_eq!(
            err.user_message("Failed to delete weight"),
            "Weight record not found"
        );
    }

    #[test]
    fn test_validation_array_falls_back() {
        let body = r#"{"detail":[{"loc":["body","weight"],"msg":"field required","type":"value_error.missing"}]}"#;
        let err = ApiError::from_status(422, body);
        assert_eq!(err.user_message("Failed to add weight"), "Failed to add weight");
    }

    #[test]
    fn test_non_json_body_falls_back() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(
            err,
            ApiError::Status {
                status: 502,
                detail: None
            }
        );
        assert_eq!(err.to_string(), "HTTP 502: no detail");
        assert_eq!(
            err.user_message("Failed to fetch weights"),
            "Failed to fetch weights"
        );
    }

    #[test]
    fn test_network_error_falls_back() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(
            err.user_message("Login failed. Please check your credentials."),
            "Login failed. Please check your credentials."
        );
    }
}
