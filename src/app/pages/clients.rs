//! Clients page component.
//!
//! Searchable client table with a modal form for create/update and
//! confirmed deletes.

use dioxus::prelude::*;

use crate::api;
use crate::app::components::{Layout, Modal};
use crate::app::confirm;
use crate::models::{Client, ClientPayload};

/// Form state for the client modal, held as the raw strings the inputs
/// produce and converted to a typed payload at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
struct ClientForm {
    first_name: String,
    last_name: String,
    phone: String,
    email: String,
    preferences: String,
    notes: String,
}

impl ClientForm {
    fn from_record(client: &Client) -> Self {
        Self {
            first_name: client.first_name.clone(),
            last_name: client.last_name.clone(),
            phone: client.phone.clone(),
            email: client.email.clone().unwrap_or_default(),
            preferences: client.preferences.clone().unwrap_or_default(),
            notes: client.notes.clone().unwrap_or_default(),
        }
    }

    fn to_payload(&self) -> Result<ClientPayload, String> {
        if self.first_name.trim().is_empty()
            || self.last_name.trim().is_empty()
            || self.phone.trim().is_empty()
        {
            return Err("First name, last name and phone are required.".into());
        }
        Ok(ClientPayload {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            preferences: self.preferences.clone(),
            notes: self.notes.clone(),
        })
    }
}

/// Clients page component.
#[component]
pub fn Clients() -> Element {
    let mut clients = use_resource(|| async {
        api::fetch_json::<Vec<Client>>(api::CLIENTS)
            .await
            .inspect_err(|err| tracing::error!(%err, "failed to load clients"))
            .ok()
    });

    let mut search = use_signal(String::new);
    let mut modal_open = use_signal(|| false);
    let mut editing_id = use_signal(|| None::<i64>);
    let mut form = use_signal(ClientForm::default);
    let mut form_error = use_signal(|| None::<String>);

    let open_create = move |_| {
        editing_id.set(None);
        form.set(ClientForm::default());
        form_error.set(None);
        modal_open.set(true);
    };

    let open_edit = move |client: Client| {
        editing_id.set(Some(client.id));
        form.set(ClientForm::from_record(&client));
        form_error.set(None);
        modal_open.set(true);
    };

    let delete = move |id: i64| {
        if !confirm("Delete this client?") {
            return;
        }
        spawn(async move {
            match api::delete(&api::item(api::CLIENTS, id)).await {
                Ok(()) => clients.restart(),
                Err(err) => tracing::error!(%err, "failed to delete client"),
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
                    api::put_json::<_, serde_json::Value>(&api::item(api::CLIENTS, id), &payload)
                        .await
                }
                None => api::post_json::<_, serde_json::Value>(api::CLIENTS, &payload).await,
            };
            match result {
                Ok(_) => {
                    modal_open.set(false);
                    clients.restart();
                }
                Err(err) => form_error.set(Some(err.to_string())),
            }
        });
    };

    let loaded = clients.read().clone();
    let content = match loaded {
        None => rsx! {
            div { class: "card", aria_busy: "true", "Loading..." }
        },
        Some(None) => rsx! {
            div { class: "card status-err", "Could not load clients. Please reload the page." }
        },
        Some(Some(list)) => {
            let term = search();
            let filtered: Vec<Client> = list.into_iter().filter(|c| c.matches(&term)).collect();
            rsx! {
                div { class: "card", style: "margin-bottom: 1.25rem;",
                    input {
                        r#type: "search",
                        placeholder: "Search clients by name or phone...",
                        value: "{search}",
                        oninput: move |e| search.set(e.value()),
                    }
                }

                div { class: "card table-container",
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Phone" }
                                th { "Email" }
                                th { "Appointments" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for client in filtered {
                                ClientRow {
                                    key: "{client.id}",
                                    client: client.clone(),
                                    on_edit: open_edit,
                                    on_delete: delete,
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        Layout {
            title: "Clients".to_string(),
            nav_active: "clients".to_string(),

            div { class: "page-header",
                h1 { "Clients" }
                button { onclick: open_create, "New client" }
            }

            {content}

            if modal_open() {
                Modal {
                    title: (if editing_id().is_some() { "Edit client" } else { "New client" }).to_string(),
                    on_close: move |_| modal_open.set(false),

                    form { onsubmit: submit,
                        if let Some(ref message) = *form_error.read() {
                            div { class: "form-error", "{message}" }
                        }

                        label { "First name *" }
                        input {
                            r#type: "text",
                            value: "{form.read().first_name}",
                            oninput: move |e| form.write().first_name = e.value(),
                        }

                        label { "Last name *" }
                        input {
                            r#type: "text",
                            value: "{form.read().last_name}",
                            oninput: move |e| form.write().last_name = e.value(),
                        }

                        label { "Phone *" }
                        input {
                            r#type: "tel",
                            value: "{form.read().phone}",
                            oninput: move |e| form.write().phone = e.value(),
                        }

                        label { "Email" }
                        input {
                            r#type: "email",
                            value: "{form.read().email}",
                            oninput: move |e| form.write().email = e.value(),
                        }

                        label { "Preferences" }
                        textarea {
                            rows: 3,
                            value: "{form.read().preferences}",
                            oninput: move |e| form.write().preferences = e.value(),
                        }

                        label { "Notes" }
                        textarea {
                            rows: 3,
                            value: "{form.read().notes}",
                            oninput: move |e| form.write().notes = e.value(),
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

/// One client table row.
#[component]
fn ClientRow(client: Client, on_edit: EventHandler<Client>, on_delete: EventHandler<i64>) -> Element {
    let id = client.id;
    let edit_target = client.clone();
    let email = client.email.clone().unwrap_or_else(|| "-".to_string());

    rsx! {
        tr {
            td { "{client.full_name()}" }
            td { "{client.phone}" }
            td { "{email}" }
            td { "{client.appointments_count}" }
            td {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_form_requires_name_and_phone() {
        let form = ClientForm::default();
        assert!(form.to_payload().is_err());

        let form = ClientForm {
            first_name: "Anna".into(),
            last_name: "Leroy".into(),
            phone: "0612345678".into(),
            ..Default::default()
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.first_name, "Anna");
        assert_eq!(payload.email, "");
    }

    #[test]
    fn test_client_form_prefills_from_record() {
        let client = Client {
            id: 9,
            first_name: "Anna".into(),
            last_name: "Leroy".into(),
            phone: "0612345678".into(),
            email: Some("anna@x.fr".into()),
            preferences: None,
            notes: Some("vip".into()),
            appointments_count: 3,
        };
        let form = ClientForm::from_record(&client);
        assert_eq!(form.email, "anna@x.fr");
        assert_eq!(form.preferences, "");
        assert_eq!(form.notes, "vip");
    }
}
