//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::{SessionStore, UserSession};

use crate::{make_session_store, sleep_ms, use_client_config};

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<UserSession>,
    /// Result of the last user-service health check; `None` until the first
    /// check completed.
    pub online: Option<bool>,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Persist `session` and publish it to the auth context.
pub fn remember_session(auth: &mut Signal<AuthState>, session: UserSession) {
    make_session_store().save(&session);
    auth.write().session = Some(session);
}

/// Drop the cached session (logout).
pub fn forget_session(auth: &mut Signal<AuthState>) {
    make_session_store().clear();
    auth.write().session = None;
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_client_config();
    let mut auth_state = use_signal(|| AuthState {
        session: make_session_store().load(),
        online: None,
    });

    // Periodic connectivity check against the user service
    let interval = config.ui.health_check_secs;
    use_effect(move || {
        if interval == 0 {
            return;
        }
        spawn(async move {
            loop {
                let online = match api::health().await {
                    Ok(status) => status.is_healthy(),
                    Err(e) => {
                        tracing::debug!("Health check failed: {}", e);
                        false
                    }
                };
                if auth_state.peek().online != Some(online) {
                    auth_state.write().online = Some(online);
                }
                sleep_ms(interval.saturating_mul(1000)).await;
            }
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "btn btn-secondary".to_string())] class: String,
    on_logout: EventHandler<()>,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| {
        forget_session(&mut auth_state);
        tracing::info!("Logged out");
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
