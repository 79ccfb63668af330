//! Service endpoints using the OnceLock pattern.
//!
//! The base URLs are set once at startup from [`store::ClientConfig`]. Calls
//! made before [`configure`] use the default configuration.

use std::sync::OnceLock;

use store::ClientConfig;

static ENDPOINTS: OnceLock<Endpoints> = OnceLock::new();

/// Base URLs of the user and weight services, without trailing slash.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    pub user_api: String,
    pub weight_api: String,
}

impl Endpoints {
    pub fn from_config(config: &ClientConfig) -> Self {
        let config = config.clone().normalized();
        Self {
            user_api: config.services.user_api_url,
            weight_api: config.services.weight_api_url,
        }
    }

    pub fn login_url(&self) -> String {
        format!("{}/login", self.user_api)
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.user_api)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.user_api)
    }

    /// `/weights`, optionally scoped to a user and a record.
    pub fn weights_url(&self, user_id: Option<i64>, weight_id: Option<i64>) -> String {
        let mut url = format!("{}/weights", self.weight_api);
        let mut sep = '?';
        if let Some(user_id) = user_id {
            url.push_str(&format!("{sep}userId={user_id}"));
            sep = '&';
        }
        if let Some(weight_id) = weight_id {
            url.push_str(&format!("{sep}weightId={weight_id}"));
        }
        url
    }
}

/// Set the endpoints for the rest of the process. Returns `false` when they
/// were already set.
pub fn configure(config: &ClientConfig) -> bool {
    let endpoints = Endpoints::from_config(config);
    tracing::info!(
        "Using user service {} and weight service {}",
        endpoints.user_api,
        endpoints.weight_api
    );
    ENDPOINTS.set(endpoints).is_ok()
}

/// Get the configured endpoints, initialising them with defaults on first use.
pub fn endpoints() -> &'static Endpoints {
    ENDPOINTS.get_or_init(|| Endpoints::from_config(&ClientConfig::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local() -> Endpoints {
        Endpoints::from_config(&ClientConfig::new(
            "http://localhost:8001/",
            "http://localhost:8000",
        ))
    }

    #[test]
    fn test_user_service_urls() {
        let e = local();
        assert_eq!(e.login_url(), "http://localhost:8001/login");
        assert_eq!(e.users_url(), "http://localhost:8001/users");
        assert_eq!(e.health_url(), "http://localhost:8001/health");
    }

    #[test]
    fn test_weights_url_query() {
        let e = local();
        assert_eq!(e.weights_url(None, None), "http://localhost:8000/weights");
        assert_eq!(
            e.weights_url(Some(7), None),
            "http://localhost:8000/weights?userId=7"
        );
        assert_eq!(
            e.weights_url(Some(7), Some(3)),
            "http://localhost:8000/weights?userId=7&weightId=3"
        );
    }
}
