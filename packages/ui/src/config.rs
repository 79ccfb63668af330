use dioxus::prelude::*;
use store::ClientConfig;

/// The client configuration provided by the platform entry point.
///
/// Falls back to the defaults when no ancestor provided one.
pub fn use_client_config() -> ClientConfig {
    try_use_context::<ClientConfig>().unwrap_or_default()
}
