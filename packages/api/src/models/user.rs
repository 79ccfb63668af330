//! # User-service request and response bodies
//!
//! ## Login
//!
//! `POST /login` takes [`LoginRequest`] and answers [`LoginResponse`]
//! (`userId`, `fullName`). The service does not echo the email, so
//! [`LoginResponse::into_session`] completes the [`UserSession`] with the
//! address the user typed.
//!
//! ## Registration
//!
//! `POST /users` takes [`RegisterRequest`] and answers `201` with
//! [`RegisterResponse`] (`userId`). Registration does not log the user in.
//!
//! ## Health
//!
//! `GET /health` answers [`HealthStatus`], e.g.
//! `{"status": "healthy", "service": "user-management-api"}`.

use serde::{Deserialize, Serialize};
use store::UserSession;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: i64,
    #[serde(default)]
    pub full_name: String,
}

impl LoginResponse {
    /// Combine with the submitted email into the session the client caches.
    pub fn into_session(self, email: &str) -> UserSession {
        UserSession {
            user_id: self.user_id,
            full_name: self.full_name,
            email: email.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub user_id: i64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_into_session() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"userId":12,"fullName":"Ada Lovelace"}"#).unwrap();
        let session = response.into_session("ada@example.com");
        assert_eq!(session.user_id, 12);
        assert_eq!(session.full_name, "Ada Lovelace");
        assert_eq!(session.email, "ada@example.com");
    }

    #[test]
    fn test_register_request_shape() {
        let body = serde_json::to_value(RegisterRequest {
            full_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
        })
        .unwrap();
        assert_eq!(body["fullName"], "Ada");
        assert_eq!(body["email"], "ada@example.com");
        assert_eq!(body["password"], "secret1");
    }

    #[test]
    fn test_health_status() {
        let health: HealthStatus =
            serde_json::from_str(r#"{"status":"healthy","service":"user-management-api"}"#)
                .unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.service.as_deref(), Some("user-management-api"));
    }
}
