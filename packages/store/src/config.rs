//! # Client configuration: `weight-tracker.toml`
//!
//! Defines the TOML configuration of the client (filename:
//! [`ClientConfig::filename`] = `"weight-tracker.toml"`). It says where the two
//! remote services live and tunes a few presentation timings.
//!
//! ## Structure
//!
//! ```toml
//! [services]
//! user_api_url = "http://localhost:8001"
//! weight_api_url = "http://localhost:8000"
//!
//! [ui]
//! success_dismiss_ms = 3000    # success banner lifetime
//! error_dismiss_ms = 0         # 0 keeps errors until the next action
//! register_redirect_ms = 2000  # delay before leaving the "registered" screen
//! weight_unit = "lb"
//! show_chart = true
//! health_check_secs = 30       # 0 disables the user-service health poll
//! ```
//!
//! ## Sources
//!
//! | Source | Platform |
//! |--------|----------|
//! | Built-in defaults | all |
//! | `USER_API_URL` / `WEIGHT_API_URL` at **build** time | all (the browser has no runtime environment) |
//! | `<config_dir>/weight-tracker/weight-tracker.toml` | desktop ([`ClientConfig::load`]) |
//!
//! All structs derive `Default` (with the production defaults) so a missing or
//! partial config file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `weight-tracker.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub services: ServicesConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Base URLs of the remote services.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// User service (login, registration, health).
    #[serde(default = "default_user_api_url")]
    pub user_api_url: String,
    /// Weight-records service.
    #[serde(default = "default_weight_api_url")]
    pub weight_api_url: String,
}

fn default_user_api_url() -> String {
    option_env!("USER_API_URL")
        .unwrap_or("http://localhost:8001")
        .to_string()
}

fn default_weight_api_url() -> String {
    option_env!("WEIGHT_API_URL")
        .unwrap_or("http://localhost:8000")
        .to_string()
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            user_api_url: default_user_api_url(),
            weight_api_url: default_weight_api_url(),
        }
    }
}

/// Presentation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_success_dismiss_ms")]
    pub success_dismiss_ms: u32,
    /// 0 keeps error banners until the next successful action.
    #[serde(default)]
    pub error_dismiss_ms: u32,
    #[serde(default = "default_register_redirect_ms")]
    pub register_redirect_ms: u32,
    #[serde(default = "default_weight_unit")]
    pub weight_unit: String,
    #[serde(default = "default_show_chart")]
    pub show_chart: bool,
    /// Interval of the user-service health poll. 0 disables it.
    #[serde(default = "default_health_check_secs")]
    pub health_check_secs: u32,
}

fn default_success_dismiss_ms() -> u32 {
    3000
}

fn default_register_redirect_ms() -> u32 {
    2000
}

fn default_weight_unit() -> String {
    "lb".to_string()
}

fn default_show_chart() -> bool {
    true
}

fn default_health_check_secs() -> u32 {
    30
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            success_dismiss_ms: default_success_dismiss_ms(),
            error_dismiss_ms: 0,
            register_redirect_ms: default_register_redirect_ms(),
            weight_unit: default_weight_unit(),
            show_chart: default_show_chart(),
            health_check_secs: default_health_check_secs(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given service base URLs.
    pub fn new(user_api_url: &str, weight_api_url: &str) -> Self {
        Self {
            services: ServicesConfig {
                user_api_url: user_api_url.to_string(),
                weight_api_url: weight_api_url.to_string(),
            },
            ui: UiConfig::default(),
        }
        .normalized()
    }

    /// Builder method to set the success banner lifetime.
    pub fn with_success_dismiss(mut self, ms: u32) -> Self {
        self.ui.success_dismiss_ms = ms;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "weight-tracker.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Self>(s).map(Self::normalized)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Strip trailing slashes so endpoint paths can be appended verbatim.
    pub fn normalized(mut self) -> Self {
        trim_url(&mut self.services.user_api_url);
        trim_url(&mut self.services.weight_api_url);
        self
    }

    /// Load the platform configuration.
    ///
    /// On desktop this reads `weight-tracker.toml` from the platform config
    /// dir when present; an unreadable file is logged and ignored. The web
    /// build only has the compiled-in defaults.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let path = dirs::config_dir()
                .unwrap_or_else(|| std::path::PathBuf::from("."))
                .join("weight-tracker")
                .join(Self::filename());
            if let Ok(raw) = std::fs::read_to_string(&path) {
                match Self::from_toml(&raw) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!("Ignoring {}: {}", path.display(), e),
                }
            }
        }
        Self::default().normalized()
    }
}

fn trim_url(url: &mut String) {
    *url = url.trim().trim_end_matches('/').to_string();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.ui.success_dismiss_ms, 3000);
        assert_eq!(config.ui.error_dismiss_ms, 0);
        assert_eq!(config.ui.register_redirect_ms, 2000);
        assert_eq!(config.ui.weight_unit, "lb");
        assert!(config.ui.show_chart);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default().normalized());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [services]
            weight_api_url = "https://weights.example.com/"

            [ui]
            show_chart = false
            "#,
        )
        .unwrap();
        assert_eq!(config.services.weight_api_url, "https://weights.example.com");
        assert_eq!(
            config.services.user_api_url,
            ServicesConfig::default().user_api_url
        );
        assert!(!config.ui.show_chart);
        assert_eq!(config.ui.success_dismiss_ms, 3000);
    }

    #[test]
    fn test_new_trims_whitespace_and_slashes() {
        let config = ClientConfig::new(" http://users.local// ", "http://weights.local/");
        assert_eq!(config.services.user_api_url, "http://users.local");
        assert_eq!(config.services.weight_api_url, "http://weights.local");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::new("http://a", "http://b").with_success_dismiss(1500);
        let raw = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&raw).unwrap(), config);
    }
}
