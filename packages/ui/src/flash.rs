use dioxus::prelude::*;
use store::FlashState;

use crate::components::{Alert, AlertVariant};
use crate::{sleep_ms, use_client_config};

/// Handle to a view's success/error banners.
///
/// Success messages dismiss themselves after `ui.success_dismiss_ms`; errors
/// after `ui.error_dismiss_ms`, or never when that is 0.
#[derive(Clone, Copy, PartialEq)]
pub struct Flash {
    state: Signal<FlashState>,
    success_ms: u32,
    error_ms: u32,
}

impl Flash {
    pub fn success(mut self, message: impl Into<String>) {
        let ticket = self.state.write().show_success(message);
        if self.success_ms == 0 {
            return;
        }
        let mut state = self.state;
        let delay = self.success_ms;
        spawn(async move {
            sleep_ms(delay).await;
            state.write().expire_success(ticket);
        });
    }

    pub fn error(mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{}", message);
        let ticket = self.state.write().show_error(message);
        if self.error_ms == 0 {
            return;
        }
        let mut state = self.state;
        let delay = self.error_ms;
        spawn(async move {
            sleep_ms(delay).await;
            state.write().expire_error(ticket);
        });
    }

    pub fn clear_error(mut self) {
        self.state.write().clear_error();
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.read().error().map(str::to_string)
    }

    pub fn success_message(&self) -> Option<String> {
        self.state.read().success().map(str::to_string)
    }
}

/// Create the banner state of a view.
pub fn use_flash() -> Flash {
    let config = use_client_config();
    let state = use_signal(FlashState::new);
    Flash {
        state,
        success_ms: config.ui.success_dismiss_ms,
        error_ms: config.ui.error_dismiss_ms,
    }
}

/// Renders the current banners, error first.
#[component]
pub fn FlashBanners(flash: Flash) -> Element {
    rsx! {
        if let Some(err) = flash.error_message() {
            Alert { variant: AlertVariant::Error, "{err}" }
        }
        if let Some(msg) = flash.success_message() {
            Alert { variant: AlertVariant::Success, "{msg}" }
        }
    }
}
