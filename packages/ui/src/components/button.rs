use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Success,
    Danger,
    Secondary,
    /// Text-only button styled like a link.
    Link,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Success => "btn btn-success",
            ButtonVariant::Danger => "btn btn-danger",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Link => "btn-link",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "".to_string())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default = "".to_string())] title: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let classes = format!("{} {}", variant.class(), class);

    rsx! {
        button {
            class: "{classes}",
            r#type: r#type.clone(),
            title: "{title}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
