//! Auth View - Login and registration form
//!
//! One form toggles between login and register. A failed request shows the
//! server's message inline and leaves the inputs as typed.

use dioxus::prelude::*;

use crate::infrastructure::spawn_task;
use crate::presentation::services::use_auth_service;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    fn subtitle(self) -> &'static str {
        match self {
            Self::Login => "Login to continue your journey",
            Self::Register => "Create an account to begin",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    fn toggle_label(self) -> &'static str {
        match self {
            Self::Login => "Don't have an account? Register",
            Self::Register => "Already have an account? Login",
        }
    }
}

#[component]
pub fn AuthView(on_authenticated: EventHandler<()>) -> Element {
    let auth = use_auth_service();

    let mut mode = use_signal(|| AuthMode::Login);
    let mut email = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_message: Signal<Option<String>> = use_signal(|| None);
    let mut submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if *submitting.read() {
            return;
        }

        let current_mode = *mode.read();
        let email_val = email.read().clone();
        let username_val = username.read().clone();
        let password_val = password.read().clone();
        let auth = auth.clone();

        submitting.set(true);
        error_message.set(None);

        spawn_task(async move {
            let result = match current_mode {
                AuthMode::Login => auth.login(&email_val, &password_val).await,
                AuthMode::Register => {
                    auth.register(&email_val, &username_val, &password_val)
                        .await
                }
            };

            match result {
                Ok(_) => on_authenticated.call(()),
                Err(e) => {
                    error_message.set(Some(e.message()));
                    submitting.set(false);
                }
            }
        });
    };

    let current_mode = *mode.read();
    let busy = *submitting.read();

    rsx! {
        div {
            class: "screen screen--centered",
            div {
                class: "card auth-card",
                div {
                    class: "card__header",
                    h1 { class: "card__title", "Life Sim Game" }
                    p { class: "card__description", "{current_mode.subtitle()}" }
                }
                form {
                    class: "form",
                    onsubmit: submit,

                    div {
                        class: "field",
                        label { class: "field-label", r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            required: true,
                            value: "{email.read()}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }

                    if current_mode == AuthMode::Register {
                        div {
                            class: "field",
                            label { class: "field-label", r#for: "username", "Username" }
                            input {
                                id: "username",
                                r#type: "text",
                                required: true,
                                value: "{username.read()}",
                                oninput: move |e| username.set(e.value()),
                            }
                        }
                    }

                    div {
                        class: "field",
                        label { class: "field-label", r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            required: true,
                            value: "{password.read()}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }

                    if let Some(err) = error_message.read().as_ref() {
                        div { class: "error-banner", "{err}" }
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn--primary btn--block",
                        disabled: busy,
                        if busy {
                            "Please wait..."
                        } else {
                            "{current_mode.submit_label()}"
                        }
                    }

                    button {
                        r#type: "button",
                        class: "btn btn--link",
                        onclick: move |_| {
                            let next = mode.read().toggled();
                            mode.set(next);
                            error_message.set(None);
                        },
                        "{current_mode.toggle_label()}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_texts_follow_toggle() {
        let mode = AuthMode::Login;
        assert_eq!(mode.submit_label(), "Login");
        assert_eq!(mode.toggle_label(), "Don't have an account? Register");

        let mode = mode.toggled();
        assert_eq!(mode, AuthMode::Register);
        assert_eq!(mode.subtitle(), "Create an account to begin");
        assert_eq!(mode.toggled(), AuthMode::Login);
    }
}
