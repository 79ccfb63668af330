use dioxus::prelude::*;

/// Page header: the title on the left, `children` right-aligned.
#[component]
pub fn Navbar(title: String, children: Element) -> Element {
    rsx! {
        header {
            class: "app-header",
            h1 { "{title}" }
            div {
                class: "user-info",
                {children}
            }
        }
    }
}
