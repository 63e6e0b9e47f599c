//! Reports page component (owner only).
//!
//! Explicit generate action over a date range; nothing is fetched until
//! both dates are chosen. The generated report can be exported as CSV.

use dioxus::prelude::*;

use crate::api;
use crate::app::components::Layout;
use crate::export;
use crate::models::Report;

/// Reports page component.
#[component]
pub fn Reports() -> Element {
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);
    let mut report = use_signal(|| None::<Report>);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let generate = move |_| {
        if start_date().is_empty() || end_date().is_empty() {
            error.set(Some("Select a start and end date.".into()));
            return;
        }
        error.set(None);
        loading.set(true);
        spawn(async move {
            let path = api::reports_query(&start_date(), &end_date());
            match api::fetch_json::<Report>(&path).await {
                Ok(data) => report.set(Some(data)),
                Err(err) => {
                    tracing::error!(%err, "failed to load report");
                    error.set(Some("Could not generate the report.".into()));
                }
            }
            loading.set(false);
        });
    };

    let export_csv = move |_| {
        if let Some(ref data) = *report.read() {
            let csv = export::report_csv(data, &start_date(), &end_date());
            let file_name = export::report_file_name(&start_date(), &end_date());
            #[cfg(target_arch = "wasm32")]
            export::download_csv(&file_name, &csv);
            #[cfg(not(target_arch = "wasm32"))]
            let _ = (file_name, csv);
        }
    };

    let generated = report.read().clone();

    rsx! {
        Layout {
            title: "Reports".to_string(),
            nav_active: "reports".to_string(),
            require_owner: true,

            div { class: "page-header",
                h1 { "Reports" }
            }

            div { class: "card", style: "margin-bottom: 1.25rem;",
                h3 { "Select a period" }
                if let Some(ref message) = *error.read() {
                    div { class: "form-error", "{message}" }
                }
                div { style: "display:grid;grid-template-columns:repeat(auto-fit,minmax(180px,1fr));gap:1rem;align-items:end;",
                    div {
                        label { "Start date" }
                        input {
                            r#type: "date",
                            value: "{start_date}",
                            oninput: move |e| start_date.set(e.value()),
                        }
                    }
                    div {
                        label { "End date" }
                        input {
                            r#type: "date",
                            value: "{end_date}",
                            oninput: move |e| end_date.set(e.value()),
                        }
                    }
                    button { onclick: generate, disabled: loading(),
                        if loading() { "Loading..." } else { "Generate report" }
                    }
                }
            }

            if let Some(ref data) = generated {
                div { class: "stat-grid",
                    div { class: "card",
                        div { class: "stat-label", "Total revenue" }
                        div { class: "stat-value", "{data.total_revenue:.2}€" }
                    }
                    div { class: "card",
                        div { class: "stat-label", "Total appointments" }
                        div { class: "stat-value", "{data.total_appointments}" }
                    }
                    div { class: "card",
                        div { class: "stat-label", "Average per appointment" }
                        div { class: "stat-value", "{data.average_revenue():.2}€" }
                    }
                }

                div { style: "margin-bottom: 1.25rem;",
                    button { class: "secondary", onclick: export_csv, "Export CSV" }
                }

                div { class: "card-grid",
                    div { class: "card table-container",
                        h3 { "Top services" }
                        table {
                            thead {
                                tr {
                                    th { "Service" }
                                    th { "Count" }
                                }
                            }
                            tbody {
                                for service in data.top_services.iter() {
                                    tr { key: "{service.service_name}",
                                        td { "{service.service_name}" }
                                        td { "{service.count}" }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "card table-container",
                        h3 { "Employee performance" }
                        table {
                            thead {
                                tr {
                                    th { "Employee" }
                                    th { "Appointments" }
                                    th { "Revenue" }
                                }
                            }
                            tbody {
                                for emp in data.employee_performance.iter() {
                                    tr { key: "{emp.full_name()}",
                                        td { "{emp.full_name()}" }
                                        td { "{emp.appointments_count}" }
                                        td { strong { "{emp.revenue:.2}€" } }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
