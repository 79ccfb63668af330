use dioxus::prelude::*;

use store::ClientConfig;
use ui::AuthProvider;
use views::{Login, Register, Tracker};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/tracker")]
    Tracker {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Service URLs are fixed at build time for the browser
    use_context_provider(|| {
        let config = ClientConfig::load();
        if !api::configure(&config) {
            tracing::debug!("Service endpoints were already configured");
        }
        config
    });

    rsx! {
        document::Stylesheet { href: ui::TRACKER_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the tracker or the login page.
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    if auth().is_logged_in() {
        nav.replace(Route::Tracker {});
    } else {
        nav.replace(Route::Login {});
    }

    rsx! {}
}
