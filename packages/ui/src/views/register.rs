use dioxus::prelude::*;
use store::validation::validate_registration;
use store::RegistrationForm;

use crate::components::{Alert, AlertVariant, Button, ButtonVariant, Input, Label};
use crate::{sleep_ms, use_client_config};

/// Registration page. After a successful sign-up it shows a confirmation and
/// calls `on_registered` once `ui.register_redirect_ms` has passed.
#[component]
pub fn RegisterView(on_registered: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let config = use_client_config();
    let mut form = use_signal(RegistrationForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut registered = use_signal(|| false);
    let redirect_ms = config.ui.register_redirect_ms;

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        error.set(None);

        let data = form();
        if let Err(err) = validate_registration(&data) {
            error.set(Some(err.to_string()));
            return;
        }

        loading.set(true);
        spawn(async move {
            match api::register(data.full_name, data.email, data.password).await {
                Ok(_) => {
                    loading.set(false);
                    registered.set(true);
                    sleep_ms(redirect_ms).await;
                    on_registered.call(());
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.user_message(api::REGISTER_FAILED)));
                }
            }
        });
    };

    if registered() {
        return rsx! {
            div {
                class: "auth-container",
                div {
                    class: "auth-box",
                    Alert {
                        variant: AlertVariant::Success,
                        h3 { "✓ Registration Successful!" }
                        p { "Your account has been created. Redirecting to login..." }
                    }
                }
            }
        };
    }

    rsx! {
        div {
            class: "auth-container",
            div {
                class: "auth-box",
                h2 { "Register for Weight Tracker" }

                if let Some(err) = error() {
                    Alert { variant: AlertVariant::Error, "{err}" }
                }

                form {
                    class: "form",
                    onsubmit: handle_register,
                    div {
                        class: "form-group",
                        Label { html_for: "register-name", "Full Name:" }
                        Input {
                            id: "register-name",
                            placeholder: "Enter your full name",
                            required: true,
                            autofocus: true,
                            value: form.read().full_name.clone(),
                            oninput: move |evt: FormEvent| form.write().full_name = evt.value(),
                        }
                    }
                    div {
                        class: "form-group",
                        Label { html_for: "register-email", "Email:" }
                        Input {
                            id: "register-email",
                            r#type: "email",
                            placeholder: "Enter your email",
                            required: true,
                            value: form.read().email.clone(),
                            oninput: move |evt: FormEvent| form.write().email = evt.value(),
                        }
                    }
                    div {
                        class: "form-group",
                        Label { html_for: "register-password", "Password:" }
                        Input {
                            id: "register-password",
                            r#type: "password",
                            placeholder: "Enter password (min 6 characters)",
                            required: true,
                            value: form.read().password.clone(),
                            oninput: move |evt: FormEvent| form.write().password = evt.value(),
                        }
                    }
                    div {
                        class: "form-group",
                        Label { html_for: "register-confirm", "Confirm Password:" }
                        Input {
                            id: "register-confirm",
                            r#type: "password",
                            placeholder: "Confirm your password",
                            required: true,
                            value: form.read().confirm_password.clone(),
                            oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "btn-block",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Register" }
                    }
                }

                div {
                    class: "auth-footer",
                    p {
                        "Already have an account? "
                        Button {
                            variant: ButtonVariant::Link,
                            onclick: move |_| on_login.call(()),
                            "Login here"
                        }
                    }
                }
            }
        }
    }
}
