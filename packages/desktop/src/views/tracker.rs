use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Tracker() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    let Some(session) = auth().session else {
        nav.replace(Route::Login {});
        return rsx! {};
    };

    rsx! {
        ui::views::TrackerView {
            session,
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}
