use dioxus::prelude::*;
use store::{EditDraft, WeightRecord};

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaPen, FaTrash};
use crate::Icon;

/// History table with inline editing.
///
/// The row named by `editing` shows a Save/Cancel form; Edit/Delete are shown
/// only when `actions_visible`.
#[component]
pub fn WeightTable(
    records: Vec<WeightRecord>,
    editing: Option<EditDraft>,
    actions_visible: bool,
    #[props(default = "lb".to_string())] unit: String,
    #[props(default)] busy: bool,
    on_edit: EventHandler<i64>,
    on_edit_input: EventHandler<String>,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
    on_delete: EventHandler<WeightRecord>,
) -> Element {
    rsx! {
        div {
            class: "table-container",
            table {
                class: "table",
                thead {
                    tr {
                        th { "Date & Time" }
                        th { "Weight ({unit})" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for record in records {
                        tr {
                            key: "{record.weight_id}",
                            td { "{record.display_time()}" }
                            td {
                                if let Some(draft) = editing.as_ref().filter(|d| d.weight_id == record.weight_id) {
                                    form {
                                        class: "inline-edit-form",
                                        onsubmit: move |evt: FormEvent| {
                                            evt.prevent_default();
                                            on_save.call(());
                                        },
                                        input {
                                            class: "input input-sm",
                                            r#type: "number",
                                            step: "0.1",
                                            required: true,
                                            autofocus: true,
                                            value: "{draft.input}",
                                            oninput: move |evt: FormEvent| on_edit_input.call(evt.value()),
                                        }
                                        Button {
                                            variant: ButtonVariant::Success,
                                            class: "btn-sm",
                                            r#type: "submit",
                                            disabled: busy,
                                            "Save"
                                        }
                                        Button {
                                            variant: ButtonVariant::Secondary,
                                            class: "btn-sm",
                                            onclick: move |_| on_cancel.call(()),
                                            "Cancel"
                                        }
                                    }
                                } else {
                                    "{record.weight}"
                                }
                            }
                            td {
                                if actions_visible {
                                    Button {
                                        variant: ButtonVariant::Primary,
                                        class: "btn-sm",
                                        title: "Edit",
                                        disabled: busy,
                                        onclick: {
                                            let weight_id = record.weight_id;
                                            move |_| on_edit.call(weight_id)
                                        },
                                        Icon { icon: FaPen, width: 12, height: 12 }
                                        " Edit"
                                    }
                                    Button {
                                        variant: ButtonVariant::Danger,
                                        class: "btn-sm",
                                        title: "Delete",
                                        disabled: busy,
                                        onclick: {
                                            let record = record.clone();
                                            move |_| on_delete.call(record.clone())
                                        },
                                        Icon { icon: FaTrash, width: 12, height: 12 }
                                        " Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
