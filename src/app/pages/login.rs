//! Login page component.

use dioxus::prelude::*;

use crate::api;
use crate::app::components::layout::CUSTOM_STYLES;
use crate::app::{use_session, Route};
use crate::session::Session;

/// Login page component.
///
/// On success the session store is updated and persisted, then navigation
/// replaces to the dashboard. On failure the store is left untouched and
/// the server's `detail` message is shown inline.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        error.set(None);
        busy.set(true);

        spawn(async move {
            match api::login(&username(), &password()).await {
                Ok(resp) => {
                    session.write().set(Session::from(resp));
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        document::Title { "Sign in - Salon Coiffure" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
        document::Style { {CUSTOM_STYLES} }

        div { class: "login-page",
            div { class: "login-container card",
                div { class: "login-header",
                    h1 { "Salon Coiffure" }
                    p { class: "login-subtitle", "Management workspace" }
                }

                form { onsubmit: submit,
                    if let Some(ref message) = *error.read() {
                        div { class: "form-error", "{message}" }
                    }

                    label { r#for: "username", "Username" }
                    input {
                        id: "username",
                        r#type: "text",
                        required: true,
                        placeholder: "Enter your username",
                        value: "{username}",
                        oninput: move |e| username.set(e.value()),
                    }

                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        required: true,
                        placeholder: "Enter your password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }

                    button { r#type: "submit", disabled: busy(),
                        if busy() { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    }
}
