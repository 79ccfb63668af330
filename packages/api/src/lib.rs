//! # API crate: REST client for the Weight Tracker services
//!
//! This crate is the only place the frontends talk to the network. It wraps the two
//! remote services the tracker depends on and hands typed results back to the UI.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`endpoints`] | Base URLs of the user and weight services (process-wide `OnceLock`), URL construction |
//! | [`error`] | [`ApiError`] and the detail-or-fallback rule for user-facing messages |
//! | [`models`] | Request/response bodies (`LoginRequest`, `WeightInput`, …) |
//!
//! ## Calls exposed here
//!
//! Every public `async fn` in this file issues exactly one HTTP request. There are
//! no retries; a failure is returned to the caller, which shows it.
//!
//! - **User service**: `login`, `register`, `health`
//! - **Weight service**: `list_weights`, `add_weight`, `update_weight`, `delete_weight`
//!
//! ## Fallback messages
//!
//! The `*_FAILED` constants are the static texts the UI shows when the server did not
//! supply a usable `detail` (see [`ApiError::user_message`]).

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

pub mod endpoints;
pub mod error;
pub mod models;

pub use endpoints::{configure, endpoints, Endpoints};
pub use error::ApiError;
pub use models::{DeleteResponse, HealthStatus};
pub use store::{UserSession, WeightRecord};

pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";
pub const FETCH_FAILED: &str = "Failed to fetch weights";
pub const ADD_FAILED: &str = "Failed to add weight";
pub const UPDATE_FAILED: &str = "Failed to update weight";
pub const DELETE_FAILED: &str = "Failed to delete weight";

/// Send a request and decode a JSON success body, turning error statuses
/// into [`ApiError::Status`].
async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &body);
        tracing::warn!("{}", err);
        return Err(err);
    }
    Ok(response.json::<T>().await?)
}

/// Log in with email and password. On success the returned session is ready
/// to be cached client-side.
pub async fn login(email: String, password: String) -> Result<UserSession, ApiError> {
    let email = email.trim().to_string();
    let body = models::LoginRequest {
        email: email.clone(),
        password,
    };
    let response: models::LoginResponse =
        send_json(Client::new().post(endpoints().login_url()).json(&body)).await?;
    tracing::info!("Logged in as user {}", response.user_id);
    Ok(response.into_session(&email))
}

/// Create an account. Returns the new user's id; the user still has to log in.
pub async fn register(
    full_name: String,
    email: String,
    password: String,
) -> Result<i64, ApiError> {
    let body = models::RegisterRequest {
        full_name: full_name.trim().to_string(),
        email: email.trim().to_string(),
        password,
    };
    let response: models::RegisterResponse =
        send_json(Client::new().post(endpoints().users_url()).json(&body)).await?;
    tracing::info!("Registered user {}", response.user_id);
    Ok(response.user_id)
}

/// Probe the user service.
pub async fn health() -> Result<HealthStatus, ApiError> {
    send_json(Client::new().get(endpoints().health_url())).await
}

/// All weight records of `user_id`, in the order the service returns them.
pub async fn list_weights(user_id: i64) -> Result<Vec<WeightRecord>, ApiError> {
    let url = endpoints().weights_url(Some(user_id), None);
    let records: Vec<WeightRecord> = send_json(Client::new().get(url)).await?;
    tracing::debug!("Fetched {} weight records", records.len());
    Ok(records)
}

/// Record a new weight. The service assigns the id and timestamp.
pub async fn add_weight(user_id: i64, weight: f64) -> Result<WeightRecord, ApiError> {
    let body = models::WeightInput { weight, user_id };
    let url = endpoints().weights_url(None, None);
    send_json(Client::new().post(url).json(&body)).await
}

/// Change the weight of an existing record. The service refreshes its
/// timestamp.
pub async fn update_weight(
    user_id: i64,
    weight_id: i64,
    weight: f64,
) -> Result<WeightRecord, ApiError> {
    let body = models::WeightUpdate { weight };
    let url = endpoints().weights_url(Some(user_id), Some(weight_id));
    send_json(Client::new().put(url).json(&body)).await
}

/// Delete a record.
pub async fn delete_weight(user_id: i64, weight_id: i64) -> Result<DeleteResponse, ApiError> {
    let url = endpoints().weights_url(Some(user_id), Some(weight_id));
    send_json(Client::new().delete(url)).await
}
