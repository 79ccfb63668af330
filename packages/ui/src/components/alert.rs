use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AlertVariant {
    Error,
    Success,
}

/// A coloured banner.
#[component]
pub fn Alert(variant: AlertVariant, children: Element) -> Element {
    let (class, role) = match variant {
        AlertVariant::Error => ("alert alert-error", "alert"),
        AlertVariant::Success => ("alert alert-success", "status"),
    };

    rsx! {
        div {
            class: class,
            role: role,
            {children}
        }
    }
}
