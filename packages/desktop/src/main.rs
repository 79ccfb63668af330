use dioxus::prelude::*;
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
    // Read weight-tracker.toml from the platform config dir, if any
    use_context_provider(|| {
        let config = store::ClientConfig::load();
        if !api::configure(&config) {
            tracing::debug!("Service endpoints were already configured");
        }
        config
    });

    rsx! {
        document::Stylesheet { href: ui::TRACKER_CSS }
        ui::AuthProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    // Redirect based on auth state
    if auth().is_logged_in() {
        nav.replace(Route::Tracker {});
    } else {
        nav.replace(Route::Login {});
    }

    rsx! {}
}
