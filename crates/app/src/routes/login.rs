use crate::auth::use_auth;
use crate::routes::{route_for, RedirectTo, Route};
use dioxus::prelude::*;
use shared_types::{AppError, DEFAULT_AUTHORIZED_PATH};
use shared_ui::{Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input};
use std::collections::HashMap;

/// Email/password sign-in against the account directory.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        return rsx! { RedirectTo { to: route_for(DEFAULT_AUTHORIZED_PATH) } };
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match server::api::login(email(), password()).await {
            Ok(principal) => {
                auth.sign_in(principal);
                navigator().replace(route_for(DEFAULT_AUTHORIZED_PATH));
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    error_msg.set(Some(AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fe);
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Use your company account to open the dashboard" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            label: "Email",
                            input_type: "email",
                            id: "email",
                            placeholder: "you@company.com",
                            value: email(),
                            error: field_errors().get("email").cloned().unwrap_or_default(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            id: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            error: field_errors().get("password").cloned().unwrap_or_default(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button { button_type: "submit", class: "auth-submit", disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        Link { to: Route::Landing {}, "Back to home" }
                    }
                }
            }
        }
    }
}
