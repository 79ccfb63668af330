use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    if auth().is_logged_in() {
        nav.replace(Route::Tracker {});
        return rsx! {};
    }

    rsx! {
        ui::views::RegisterView {
            on_registered: move |_| {
                nav.replace(Route::Login {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
