use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};

/// The "Add New Weight Entry" section. Validation and the request are left to the
/// owner through `on_submit`.
#[component]
pub fn AddWeightForm(
    value: String,
    #[props(default = "lb".to_string())] unit: String,
    #[props(default)] busy: bool,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "section",
            h2 { "Add New Weight Entry" }
            form {
                class: "form inline-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                div {
                    class: "form-group",
                    Label { html_for: "weight", "Weight ({unit}):" }
                    Input {
                        id: "weight",
                        r#type: "number",
                        step: "0.1".to_string(),
                        placeholder: "Enter weight",
                        required: true,
                        disabled: busy,
                        value: value.clone(),
                        oninput: move |evt: FormEvent| on_input.call(evt.value()),
                    }
                }
                Button {
                    variant: ButtonVariant::Success,
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Saving..." } else { "Add Weight" }
                }
            }
        }
    }
}
