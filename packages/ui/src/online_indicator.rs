//! Connectivity indicator for the tracker header.

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::icons::{FaCloud, FaCloudArrowUp};
use crate::Icon;

/// A small icon that shows whether the user service answered its last health
/// check.
///
/// - **Reachable**: cloud icon ("Connected")
/// - **Unreachable**: cloud-up icon ("Offline")
/// - **Not checked yet**: nothing
#[component]
pub fn OnlineIndicator() -> Element {
    let auth = use_auth();

    match auth().online {
        Some(true) => rsx! {
            span {
                class: "online-indicator online-indicator--online",
                title: "Connected",
                Icon { icon: FaCloud, width: 14, height: 14 }
            }
        },
        Some(false) => rsx! {
            span {
                class: "online-indicator online-indicator--offline",
                title: "Offline",
                Icon { icon: FaCloudArrowUp, width: 14, height: 14 }
            }
        },
        None => rsx! {},
    }
}
