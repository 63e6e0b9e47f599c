//! Dioxus application entry point: routing and session context.

use dioxus::prelude::*;

pub mod components;
pub mod pages;

use crate::session::SessionStore;
use pages::{Appointments, Clients, Dashboard, Employees, Login, Products, Reports, Services};

/// Root app component with routing.
#[component]
pub fn App() -> Element {
    // Session context at app root: restored from localStorage before any
    // protected view renders.
    use_context_provider(|| Signal::new(SessionStore::restore()));

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/")]
    Dashboard {},
    #[route("/appointments")]
    Appointments {},
    #[route("/clients")]
    Clients {},
    #[route("/services")]
    Services {},
    #[route("/products")]
    Products {},
    #[route("/employees")]
    Employees {},
    #[route("/reports")]
    Reports {},
}

/// Session store context hook.
pub fn use_session() -> Signal<SessionStore> {
    use_context()
}

/// Browser confirm dialog. Denies on non-wasm targets so destructive
/// actions never fire from native test code.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        false
    }
}
