//! Dashboard page component.
//!
//! Aggregate counters for the day, fetched from the dashboard endpoint.

use dioxus::prelude::*;

use crate::api;
use crate::app::components::Layout;
use crate::models::DashboardStats;

/// Dashboard page component.
#[component]
pub fn Dashboard() -> Element {
    let stats = use_resource(|| async {
        api::fetch_json::<DashboardStats>(api::DASHBOARD)
            .await
            .inspect_err(|err| tracing::error!(%err, "failed to load dashboard stats"))
            .ok()
    });

    let loaded = stats.read().clone();
    let content = match loaded {
        None => rsx! {
            div { class: "card", aria_busy: "true", "Loading..." }
        },
        Some(None) => rsx! {
            div { class: "card status-err",
                "Could not load today's statistics. Please reload the page."
            }
        },
        Some(Some(stats)) => {
            let stock_badge = if stats.low_stock_count > 0 {
                "badge badge-warning"
            } else {
                "badge badge-success"
            };
            rsx! {
                div { class: "stat-grid",
                    div { class: "card",
                        div { class: "stat-label", "Today's appointments" }
                        div { class: "stat-value", "{stats.today_appointments}" }
                    }
                    div { class: "card",
                        div { class: "stat-label", "Today's revenue" }
                        div { class: "stat-value", "{stats.today_revenue:.2}€" }
                    }
                    div { class: "card",
                        div { class: "stat-label", "Low stock alerts" }
                        div { class: "stat-value",
                            span { class: stock_badge, "{stats.low_stock_count}" }
                        }
                    }
                    div { class: "card",
                        div { class: "stat-label", "Total clients" }
                        div { class: "stat-value", "{stats.total_clients}" }
                    }
                }

                div { class: "card",
                    h3 { "Welcome to your workspace" }
                    p {
                        "Use the sidebar to manage appointments, clients, services and "
                        "stock. The counters above summarize today's activity."
                    }
                }
            }
        }
    };

    rsx! {
        Layout {
            title: "Dashboard".to_string(),
            nav_active: "dashboard".to_string(),

            div { class: "page-header",
                h1 { "Dashboard" }
            }

            {content}
        }
    }
}
