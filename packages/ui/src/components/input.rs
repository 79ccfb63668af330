use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default)] step: Option<String>,
    #[props(default)] required: bool,
    #[props(default)] autofocus: bool,
    #[props(default)] disabled: bool,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: r#type.clone(),
            placeholder: "{placeholder}",
            step: step.clone(),
            required: required,
            autofocus: autofocus,
            disabled: disabled,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            r#for: "{html_for}",
            class: "label",
            {children}
        }
    }
}
