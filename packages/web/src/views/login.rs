use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    // Already signed in
    if auth().is_logged_in() {
        nav.replace(Route::Tracker {});
        return rsx! {};
    }

    rsx! {
        ui::views::LoginView {
            on_success: move |_| {
                nav.replace(Route::Tracker {});
            },
            on_register: move |_| {
                nav.push(Route::Register {});
            },
        }
    }
}
