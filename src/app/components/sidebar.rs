//! Sidebar navigation.

use dioxus::prelude::*;

use crate::app::{use_session, Route};
use crate::models::Role;

#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    /// The currently active page ID (e.g. "dashboard", "clients")
    pub active: String,
}

/// Sidebar with brand, current-user block and navigation links.
///
/// Employees and Reports entries only render for owners; the pages behind
/// them are additionally guarded by the layout.
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let nav_link_class = |page: &str| {
        if props.active == page {
            "nav-item active"
        } else {
            "nav-item"
        }
    };

    let is_owner = session.read().has_role(Role::Owner);
    let (initials, full_name, role_label) = match session.read().identity() {
        Some(user) => (user.initials(), user.full_name(), user.role.label()),
        None => (String::new(), String::new(), ""),
    };

    let logout = move |_| {
        session.write().clear();
        nav.replace(Route::Login {});
    };

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-header",
                h2 { class: "sidebar-title", "Salon Coiffure" }
            }

            div { class: "user-info",
                div { class: "user-avatar", "{initials}" }
                div { class: "user-details",
                    div { class: "user-name", "{full_name}" }
                    div { class: "user-role", "{role_label}" }
                }
            }

            nav { class: "sidebar-nav",
                a { class: nav_link_class("dashboard"), href: "/", "Dashboard" }
                a { class: nav_link_class("appointments"), href: "/appointments", "Appointments" }
                a { class: nav_link_class("clients"), href: "/clients", "Clients" }
                a { class: nav_link_class("services"), href: "/services", "Services" }
                a { class: nav_link_class("products"), href: "/products", "Stock" }
                if is_owner {
                    a { class: nav_link_class("employees"), href: "/employees", "Employees" }
                    a { class: nav_link_class("reports"), href: "/reports", "Reports" }
                }
            }

            button { class: "logout-btn", onclick: logout, "Log out" }
        }
    }
}
