//! Layout component wrapping all protected pages with Pico CSS, the
//! sidebar, and the session guard.

use dioxus::prelude::*;

use super::sidebar::Sidebar;
use crate::app::{use_session, Route};
use crate::models::Role;

/// CSS styles for the application (extends Pico CSS). Shared with the
/// login page, which renders outside this layout.
pub(crate) const CUSTOM_STYLES: &str = r#"
.login-page { min-height: 100vh; display: flex; align-items: center; justify-content: center; }
.login-container { width: 100%; max-width: 400px; }
.login-header { text-align: center; margin-bottom: 1.5rem; }
.login-subtitle { color: var(--pico-muted-color); }
.demo-info { font-size: 0.85rem; color: var(--pico-muted-color); text-align: center; margin-top: 1.5rem; }
:root { --pico-font-size: 15px; }
.layout { display: grid; grid-template-columns: 240px 1fr; min-height: 100vh; }
.sidebar { background: var(--pico-card-background-color); padding: 1rem; display: flex; flex-direction: column; gap: 1rem; border-right: 1px solid var(--pico-muted-border-color); }
.sidebar-title { font-size: 1.2rem; margin: 0; }
.user-info { display: flex; align-items: center; gap: 0.75rem; }
.user-avatar { width: 42px; height: 42px; border-radius: 50%; background: var(--pico-primary-background); color: var(--pico-primary-inverse); display: flex; align-items: center; justify-content: center; font-weight: bold; }
.user-name { font-weight: 600; }
.user-role { font-size: 0.8rem; color: var(--pico-muted-color); }
.sidebar-nav { display: flex; flex-direction: column; gap: 0.25rem; flex: 1; }
.nav-item { display: block; padding: 0.5rem 0.75rem; border-radius: 8px; text-decoration: none; }
.nav-item.active { background: var(--pico-primary-background); color: var(--pico-primary-inverse); }
.logout-btn { margin-top: auto; }
.main-content { padding: 1.5rem; }
.page-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1.5rem; gap: 1rem; flex-wrap: wrap; }
.card { background: var(--pico-card-background-color); border-radius: 12px; padding: 1.25rem; }
.card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.25rem; }
.stat-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.25rem; margin-bottom: 1.5rem; }
.stat-label { font-size: 0.85rem; color: var(--pico-muted-color); }
.stat-value { font-size: 2rem; font-weight: bold; }
.table-container { overflow-x: auto; }
.badge { padding: 0.15rem 0.6rem; border-radius: 999px; font-size: 0.8rem; }
.badge-info { background: #87ceeb; color: #123; }
.badge-success { background: #90ee90; color: #131; }
.badge-danger { background: #ffb3b3; color: #311; }
.badge-warning { background: #ffd700; color: #331; }
.status-err { color: var(--pico-del-color); }
.form-error { color: var(--pico-del-color); margin-bottom: 1rem; }
.low-stock td { background: rgba(255, 215, 0, 0.15); }
.modal-overlay { position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 50; }
.modal-content { max-width: 480px; width: 100%; margin: 1rem; max-height: 90vh; overflow-y: auto; }
.modal-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
.modal-title { margin: 0; font-size: 1.2rem; }
.close-btn { background: none; border: none; color: var(--pico-muted-color); font-size: 1.4rem; padding: 0 0.25rem; width: auto; }
.actions { display: flex; gap: 0.5rem; }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Restrict the page to owners; others see an access-denied placeholder
    #[props(default = false)]
    pub require_owner: bool,
    /// Page content
    pub children: Element,
}

/// Layout wrapping all protected pages.
///
/// This is the route guard: without an active session it redirects to the
/// login view, discarding the requested path. Owner-only pages render an
/// access-denied placeholder for staff instead of their content.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let full_title = format!("{} - Salon Coiffure", props.title);

    let authenticated = session.read().is_authenticated();
    use_effect(move || {
        if !session.read().is_authenticated() {
            nav.replace(Route::Login {});
        }
    });
    if !authenticated {
        // Redirect in flight; render nothing rather than a protected view.
        return rsx! {};
    }

    let denied = props.require_owner && !session.read().has_role(Role::Owner);
    let body = if denied {
        rsx! {
            div { class: "card",
                h2 { "Access denied" }
                p { "This section is reserved for the owner." }
            }
        }
    } else {
        rsx! { {props.children} }
    };

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
        document::Style { {CUSTOM_STYLES} }

        div { class: "layout",
            Sidebar { active: props.nav_active.clone() }
            main { class: "main-content",
                {body}
            }
        }
    }
}
