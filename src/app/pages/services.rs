//! Services page component.
//!
//! Card grid of the salon's offerings with a modal form for
//! create/update and confirmed deletes.

use dioxus::prelude::*;

use crate::api;
use crate::app::components::{Layout, Modal};
use crate::app::confirm;
use crate::models::{Service, ServiceKind, ServicePayload};

/// Form state for the service modal. Price and duration stay strings
/// until submit so partial input never panics; validation happens in
/// `to_payload`.
#[derive(Debug, Clone, Default, PartialEq)]
struct ServiceForm {
    name: String,
    kind: ServiceKind,
    price: String,
    duration_minutes: String,
    description: String,
}

impl ServiceForm {
    fn from_record(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            kind: service.kind,
            price: format!("{}", service.price),
            duration_minutes: service.duration_minutes.to_string(),
            description: service.description.clone().unwrap_or_default(),
        }
    }

    fn to_payload(&self) -> Result<ServicePayload, String> {
        if self.name.trim().is_empty() {
            return Err("A service name is required.".into());
        }
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| "Price must be a number.".to_string())?;
        if price < 0.0 {
            return Err("Price cannot be negative.".into());
        }
        let duration_minutes: u32 = self
            .duration_minutes
            .trim()
            .parse()
            .map_err(|_| "Duration must be a whole number of minutes.".to_string())?;
        Ok(ServicePayload {
            name: self.name.trim().to_string(),
            kind: self.kind,
            price,
            duration_minutes,
            description: self.description.clone(),
        })
    }
}

/// Services page component.
#[component]
pub fn Services() -> Element {
    let mut services = use_resource(|| async {
        api::fetch_json::<Vec<Service>>(api::SERVICES)
            .await
            .inspect_err(|err| tracing::error!(%err, "failed to load services"))
            .ok()
    });

    let mut modal_open = use_signal(|| false);
    let mut editing_id = use_signal(|| None::<i64>);
    let mut form = use_signal(ServiceForm::default);
    let mut form_error = use_signal(|| None::<String>);

    let open_create = move |_| {
        editing_id.set(None);
        form.set(ServiceForm::default());
        form_error.set(None);
        modal_open.set(true);
    };

    let open_edit = move |service: Service| {
        editing_id.set(Some(service.id));
        form.set(ServiceForm::from_record(&service));
        form_error.set(None);
        modal_open.set(true);
    };

    let delete = move |id: i64| {
        if !confirm("Delete this service?") {
            return;
        }
        spawn(async move {
            match api::delete(&api::item(api::SERVICES, id)).await {
                Ok(()) => services.restart(),
                Err(err) => tracing::error!(%err, "failed to delete service"),
            }
        });
    };

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let payload = match form.read().to_payload() {
            Ok(payload) => payload,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        spawn(async move {
            let result = match editing_id() {
                Some(id) => {
                    api::put_json::<_, serde_json::Value>(&api::item(api::SERVICES, id), &payload)
                        .await
                }
                None => api::post_json::<_, serde_json::Value>(api::SERVICES, &payload).await,
            };
            match result {
                Ok(_) => {
                    modal_open.set(false);
                    services.restart();
                }
                Err(err) => form_error.set(Some(err.to_string())),
            }
        });
    };

    let loaded = services.read().clone();
    let content = match loaded {
        None => rsx! {
            div { class: "card", aria_busy: "true", "Loading..." }
        },
        Some(None) => rsx! {
            div { class: "card status-err", "Could not load services. Please reload the page." }
        },
        Some(Some(list)) => rsx! {
            div { class: "card-grid",
                for service in list {
                    ServiceCard {
                        key: "{service.id}",
                        service: service.clone(),
                        on_edit: open_edit,
                        on_delete: delete,
                    }
                }
            }
        },
    };

    rsx! {
        Layout {
            title: "Services".to_string(),
            nav_active: "services".to_string(),

            div { class: "page-header",
                h1 { "Services" }
                button { onclick: open_create, "New service" }
            }

            {content}

            if modal_open() {
                Modal {
                    title: (if editing_id().is_some() { "Edit service" } else { "New service" }).to_string(),
                    on_close: move |_| modal_open.set(false),

                    form { onsubmit: submit,
                        if let Some(ref message) = *form_error.read() {
                            div { class: "form-error", "{message}" }
                        }

                        label { "Name *" }
                        input {
                            r#type: "text",
                            value: "{form.read().name}",
                            oninput: move |e| form.write().name = e.value(),
                        }

                        label { "Category *" }
                        select {
                            value: "{form.read().kind.as_str()}",
                            onchange: move |e| {
                                if let Ok(kind) = e.value().parse() {
                                    form.write().kind = kind;
                                }
                            },
                            for kind in ServiceKind::ALL {
                                option {
                                    value: kind.as_str(),
                                    selected: form.read().kind == kind,
                                    "{kind.label()}"
                                }
                            }
                        }

                        label { "Price (€) *" }
                        input {
                            r#type: "number",
                            step: "0.01",
                            value: "{form.read().price}",
                            oninput: move |e| form.write().price = e.value(),
                        }

                        label { "Duration (minutes) *" }
                        input {
                            r#type: "number",
                            value: "{form.read().duration_minutes}",
                            oninput: move |e| form.write().duration_minutes = e.value(),
                        }

                        label { "Description" }
                        textarea {
                            rows: 3,
                            value: "{form.read().description}",
                            oninput: move |e| form.write().description = e.value(),
                        }

                        button { r#type: "submit",
                            if editing_id().is_some() { "Update" } else { "Create" }
                        }
                    }
                }
            }
        }
    }
}

/// One service card.
#[component]
fn ServiceCard(
    service: Service,
    on_edit: EventHandler<Service>,
    on_delete: EventHandler<i64>,
) -> Element {
    let id = service.id;
    let edit_target = service.clone();

    rsx! {
        div { class: "card",
            h3 { "{service.name}" }
            p { class: "stat-label", "{service.kind.label()}" }
            div { style: "display:flex;justify-content:space-between;align-items:center;margin:0.75rem 0;",
                strong { style: "font-size:1.4rem;", "{service.price:.2}€" }
                span { class: "stat-label", "{service.duration_minutes} min" }
            }
            if let Some(ref description) = service.description {
                p { class: "stat-label", "{description}" }
            }
            div { class: "actions",
                button {
                    class: "secondary",
                    onclick: move |_| on_edit.call(edit_target.clone()),
                    "Edit"
                }
                button {
                    class: "contrast",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_form_parses_numeric_fields() {
        let form = ServiceForm {
            name: "Cut & style".into(),
            kind: ServiceKind::Cut,
            price: "35.50".into(),
            duration_minutes: "45".into(),
            description: String::new(),
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.price, 35.5);
        assert_eq!(payload.duration_minutes, 45);
    }

    #[test]
    fn test_service_form_rejects_bad_input() {
        let mut form = ServiceForm {
            name: "Cut".into(),
            kind: ServiceKind::Cut,
            price: "abc".into(),
            duration_minutes: "45".into(),
            description: String::new(),
        };
        assert!(form.to_payload().is_err());

        form.price = "-5".into();
        assert!(form.to_payload().is_err());

        form.price = "30".into();
        form.duration_minutes = "2.5".into();
        assert!(form.to_payload().is_err());

        form.name = "   ".into();
        form.duration_minutes = "30".into();
        assert!(form.to_payload().is_err());
    }

    #[test]
    fn test_service_form_roundtrips_record() {
        let service = Service {
            id: 1,
            name: "Color".into(),
            kind: ServiceKind::Color,
            price: 60.0,
            duration_minutes: 90,
            description: Some("Full color".into()),
        };
        let form = ServiceForm::from_record(&service);
        assert_eq!(form.price, "60");
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.kind, ServiceKind::Color);
        assert_eq!(payload.price, 60.0);
    }
}
