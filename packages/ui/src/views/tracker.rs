//! The signed-in page: add form, history table, chart and their banners.

use dioxus::prelude::*;
use store::{AddForm, TrackerState, UserSession, WeightRecord};

use crate::components::{Button, ButtonVariant};
use crate::views::ConfirmDialog;
use crate::{
    use_client_config, use_flash, AddWeightForm, FlashBanners, LogoutButton, Navbar,
    OnlineIndicator, WeightChart, WeightSummaryCards, WeightTable,
};

#[component]
pub fn TrackerView(session: UserSession, on_logout: EventHandler<()>) -> Element {
    let config = use_client_config();
    let unit = config.ui.weight_unit.clone();
    let flash = use_flash();
    let mut tracker = use_signal(TrackerState::new);
    let mut add_form = use_signal(AddForm::default);
    let mut show_chart = use_signal(|| config.ui.show_chart);
    let mut pending_delete = use_signal(|| Option::<WeightRecord>::None);
    let user_id = session.user_id;

    // Reload the list; a failure empties it and shows the error.
    let refresh = move || async move {
        match api::list_weights(user_id).await {
            Ok(records) => {
                tracker.write().replace_records(records);
                flash.clear_error();
            }
            Err(err) => {
                tracker.write().fetch_failed();
                flash.error(err.user_message(api::FETCH_FAILED));
            }
        }
    };

    use_hook(move || {
        spawn(async move {
            tracker.write().begin_request();
            refresh().await;
            tracker.write().finish_request();
        });
    });

    let handle_add = move |_: ()| {
        let weight = match add_form.read().request() {
            Ok(weight) => weight,
            Err(err) => {
                flash.error(err.to_string());
                return;
            }
        };
        if !tracker.write().begin_request() {
            return;
        }
        spawn(async move {
            match api::add_weight(user_id, weight).await {
                Ok(record) => {
                    flash.success(format!(
                        "Weight added successfully! Weight ID: {}",
                        record.weight_id
                    ));
                    add_form.write().submitted();
                    refresh().await;
                }
                Err(err) => flash.error(err.user_message(api::ADD_FAILED)),
            }
            tracker.write().finish_request();
        });
    };

    let handle_save = move |_: ()| {
        let request = tracker.read().edit_request();
        let (weight_id, weight) = match request {
            Some(Ok(request)) => request,
            Some(Err(err)) => {
                flash.error(err.to_string());
                return;
            }
            None => return,
        };
        if !tracker.write().begin_request() {
            return;
        }
        spawn(async move {
            match api::update_weight(user_id, weight_id, weight).await {
                Ok(_) => {
                    flash.success("Weight updated successfully!");
                    tracker.write().cancel_edit();
                    refresh().await;
                }
                Err(err) => {
                    // The row is gone on the server; reload before reporting
                    if err.is_not_found() {
                        tracker.write().cancel_edit();
                        refresh().await;
                    }
                    flash.error(err.user_message(api::UPDATE_FAILED));
                }
            }
            tracker.write().finish_request();
        });
    };

    let handle_refresh = move |_: MouseEvent| {
        if !tracker.write().begin_request() {
            return;
        }
        spawn(async move {
            refresh().await;
            tracker.write().finish_request();
        });
    };

    let handle_confirm_delete = move |_: ()| {
        if !tracker.write().begin_request() {
            return;
        }
        let Some(record) = pending_delete.take() else {
            tracker.write().finish_request();
            return;
        };
        spawn(async move {
            match api::delete_weight(user_id, record.weight_id).await {
                Ok(response) => {
                    tracing::info!("{} (weight {})", response.message, response.weight_id);
                    flash.success("Weight deleted successfully!");
                    refresh().await;
                }
                Err(err) => {
                    if err.is_not_found() {
                        refresh().await;
                    }
                    flash.error(err.user_message(api::DELETE_FAILED));
                }
            }
            tracker.write().finish_request();
        });
    };

    let (records, editing, actions_visible, busy) = {
        let state = tracker.read();
        (
            state.records().to_vec(),
            state.editing().cloned(),
            state.row_actions_visible(),
            state.is_busy(),
        )
    };
    let is_empty = records.is_empty();
    let welcome = format!("Welcome, {}!", session.display_name());

    let confirm_message = pending_delete.read().as_ref().map(|record| {
        format!(
            "Delete weight record ({} {unit} from {})?",
            record.weight,
            record.display_date()
        )
    });

    rsx! {
        Navbar {
            title: "Weight Tracker",
            OnlineIndicator {}
            span { "{welcome}" }
            LogoutButton { on_logout }
        }

        div {
            class: "container",
            FlashBanners { flash }

            AddWeightForm {
                value: add_form.read().input.clone(),
                unit: unit.clone(),
                busy,
                on_input: move |value: String| add_form.write().input = value,
                on_submit: handle_add,
            }

            if !is_empty {
                div {
                    class: "section",
                    div {
                        class: "section-header",
                        h2 { "Progress" }
                        Button {
                            variant: ButtonVariant::Secondary,
                            class: "btn-sm",
                            onclick: move |_| show_chart.toggle(),
                            if show_chart() { "Hide Chart" } else { "Show Chart" }
                        }
                    }
                    WeightSummaryCards { records: records.clone(), unit: unit.clone() }
                    if show_chart() {
                        WeightChart { records: records.clone(), unit: unit.clone() }
                    }
                }
            }

            div {
                class: "section",
                div {
                    class: "section-header",
                    h2 { "Your Weight History" }
                    Button {
                        variant: ButtonVariant::Secondary,
                        class: "btn-sm",
                        disabled: busy,
                        onclick: handle_refresh,
                        "Refresh"
                    }
                }
                if is_empty {
                    p {
                        class: "empty-message",
                        "No weight entries yet. Add your first weight above!"
                    }
                } else {
                    WeightTable {
                        records: records.clone(),
                        editing: editing.clone(),
                        actions_visible,
                        unit: unit.clone(),
                        busy,
                        on_edit: move |weight_id: i64| {
                            tracker.write().start_edit(weight_id);
                        },
                        on_edit_input: move |value: String| tracker.write().set_edit_input(value),
                        on_save: handle_save,
                        on_cancel: move |_| tracker.write().cancel_edit(),
                        on_delete: move |record: WeightRecord| pending_delete.set(Some(record)),
                    }
                }
            }
        }

        if let Some(message) = confirm_message {
            ConfirmDialog {
                message,
                busy,
                on_confirm: handle_confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
