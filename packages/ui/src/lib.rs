//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::make_session_store;

mod config;
pub use config::use_client_config;

mod timer;
pub use timer::sleep_ms;

pub mod views;

pub const TRACKER_CSS: Asset = asset!("/assets/styling/tracker.css");

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{forget_session, remember_session, use_auth, AuthProvider, AuthState, LogoutButton};

mod flash;
pub use flash::{use_flash, Flash, FlashBanners};

mod online_indicator;
pub use online_indicator::OnlineIndicator;

mod weight_table;
pub use weight_table::WeightTable;

mod weight_chart;
pub use weight_chart::{WeightChart, WeightSummaryCards};

mod add_weight_form;
pub use add_weight_form::AddWeightForm;
