//! Email/password login form.

use dioxus::prelude::*;
use store::validation::validate_login;

use crate::components::{Alert, AlertVariant, Button, ButtonVariant, Input, Label};
use crate::{remember_session, use_auth};

/// Login page. `on_success` fires once the session is stored and published.
#[component]
pub fn LoginView(on_success: EventHandler<()>, on_register: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        error.set(None);

        let e = email();
        let p = password();
        if let Err(err) = validate_login(&e, &p) {
            error.set(Some(err.to_string()));
            return;
        }

        loading.set(true);
        spawn(async move {
            match api::login(e, p).await {
                Ok(session) => {
                    remember_session(&mut auth, session);
                    loading.set(false);
                    on_success.call(());
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.user_message(api::LOGIN_FAILED)));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",
            div {
                class: "auth-box",
                h2 { "Login to Weight Tracker" }

                if let Some(err) = error() {
                    Alert { variant: AlertVariant::Error, "{err}" }
                }

                form {
                    class: "form",
                    onsubmit: handle_login,
                    div {
                        class: "form-group",
                        Label { html_for: "login-email", "Email:" }
                        Input {
                            id: "login-email",
                            r#type: "email",
                            placeholder: "Enter your email",
                            required: true,
                            autofocus: true,
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-group",
                        Label { html_for: "login-password", "Password:" }
                        Input {
                            id: "login-password",
                            r#type: "password",
                            placeholder: "Enter your password",
                            required: true,
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "btn-block",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Logging in..." } else { "Login" }
                    }
                }

                div {
                    class: "auth-footer",
                    p {
                        "Don't have an account? "
                        Button {
                            variant: ButtonVariant::Link,
                            onclick: move |_| on_register.call(()),
                            "Register here"
                        }
                    }
                }
            }
        }
    }
}
