//! Appointments page component.
//!
//! The list needs the client, service and employee collections to fill
//! the form selects, so the page fetches all four concurrently and only
//! renders once every fetch has resolved. Any single failure aborts the
//! combined render; no partial data is shown.

use dioxus::prelude::*;

use crate::api;
use crate::app::components::{Layout, Modal};
use crate::app::{confirm, use_session};
use crate::models::{
    format_date_time, Appointment, AppointmentPayload, AppointmentStatus, Client, Employee,
    Service,
};

/// Everything the page needs, loaded in one shot.
#[derive(Debug, Clone, PartialEq)]
struct AppointmentsData {
    appointments: Vec<Appointment>,
    clients: Vec<Client>,
    services: Vec<Service>,
    employees: Vec<Employee>,
}

/// Form state for the appointment modal. Select values stay strings (the
/// ids the options carry) until submit.
#[derive(Debug, Clone, Default, PartialEq)]
struct AppointmentForm {
    date_time: String,
    client: String,
    employee: String,
    service: String,
    status: AppointmentStatus,
    notes: String,
}

impl AppointmentForm {
    /// Blank form for a new appointment, defaulting the employee to the
    /// logged-in identity.
    fn new_for(employee_id: Option<i64>) -> Self {
        Self {
            employee: employee_id.map(|id| id.to_string()).unwrap_or_default(),
            ..Default::default()
        }
    }

    fn from_record(appointment: &Appointment) -> Self {
        Self {
            date_time: appointment.date_time_local(),
            client: appointment.client.to_string(),
            employee: appointment.employee.to_string(),
            service: appointment.service.to_string(),
            status: appointment.status,
            notes: appointment.notes.clone().unwrap_or_default(),
        }
    }

    fn to_payload(&self) -> Result<AppointmentPayload, String> {
        if self.date_time.trim().is_empty() {
            return Err("Pick a date and time.".into());
        }
        let client: i64 = self.client.parse().map_err(|_| "Select a client.".to_string())?;
        let employee: i64 = self
            .employee
            .parse()
            .map_err(|_| "Select an employee.".to_string())?;
        let service: i64 = self
            .service
            .parse()
            .map_err(|_| "Select a service.".to_string())?;
        Ok(AppointmentPayload {
            date_time: self.date_time.clone(),
            client,
            employee,
            service,
            status: self.status,
            notes: self.notes.clone(),
        })
    }
}

/// Appointments page component.
#[component]
pub fn Appointments() -> Element {
    let session = use_session();

    let mut data = use_resource(|| async {
        let fetched = futures::try_join!(
            api::fetch_json::<Vec<Appointment>>(api::APPOINTMENTS),
            api::fetch_json::<Vec<Client>>(api::CLIENTS),
            api::fetch_json::<Vec<Service>>(api::SERVICES),
            api::fetch_json::<Vec<Employee>>(api::USERS),
        );
        match fetched {
            Ok((appointments, clients, services, employees)) => Some(AppointmentsData {
                appointments,
                clients,
                services,
                employees,
            }),
            Err(err) => {
                tracing::error!(%err, "failed to load appointments data");
                None
            }
        }
    });

    let mut modal_open = use_signal(|| false);
    let mut editing_id = use_signal(|| None::<i64>);
    let mut form = use_signal(AppointmentForm::default);
    let mut form_error = use_signal(|| None::<String>);

    let open_create = move |_| {
        let me = session.read().identity().map(|u| u.id);
        editing_id.set(None);
        form.set(AppointmentForm::new_for(me));
        form_error.set(None);
        modal_open.set(true);
    };

    let open_edit = move |appointment: Appointment| {
        editing_id.set(Some(appointment.id));
        form.set(AppointmentForm::from_record(&appointment));
        form_error.set(None);
        modal_open.set(true);
    };

    let delete = move |id: i64| {
        if !confirm("Delete this appointment?") {
            return;
        }
        spawn(async move {
            match api::delete(&api::item(api::APPOINTMENTS, id)).await {
                Ok(()) => data.restart(),
                Err(err) => tracing::error!(%err, "failed to delete appointment"),
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
                    api::put_json::<_, serde_json::Value>(
                        &api::item(api::APPOINTMENTS, id),
                        &payload,
                    )
                    .await
                }
                None => api::post_json::<_, serde_json::Value>(api::APPOINTMENTS, &payload).await,
            };
            match result {
                Ok(_) => {
                    modal_open.set(false);
                    data.restart();
                }
                Err(err) => form_error.set(Some(err.to_string())),
            }
        });
    };

    let loaded = data.read().clone();
    let reference = loaded.clone().flatten();

    let content = match loaded {
        None => rsx! {
            div { class: "card", aria_busy: "true", "Loading..." }
        },
        Some(None) => rsx! {
            div { class: "card status-err", "Could not load appointments. Please reload the page." }
        },
        Some(Some(data)) => rsx! {
            div { class: "card table-container",
                table {
                    thead {
                        tr {
                            th { "Date & time" }
                            th { "Client" }
                            th { "Employee" }
                            th { "Service" }
                            th { "Status" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for appointment in data.appointments {
                            AppointmentRow {
                                key: "{appointment.id}",
                                appointment: appointment.clone(),
                                on_edit: open_edit,
                                on_delete: delete,
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        Layout {
            title: "Appointments".to_string(),
            nav_active: "appointments".to_string(),

            div { class: "page-header",
                h1 { "Appointments" }
                button { onclick: open_create, "New appointment" }
            }

            {content}

            if modal_open() {
                if let Some(ref data) = reference {
                    Modal {
                        title: (if editing_id().is_some() { "Edit appointment" } else { "New appointment" }).to_string(),
                        on_close: move |_| modal_open.set(false),

                        form { onsubmit: submit,
                            if let Some(ref message) = *form_error.read() {
                                div { class: "form-error", "{message}" }
                            }

                            label { "Date and time *" }
                            input {
                                r#type: "datetime-local",
                                value: "{form.read().date_time}",
                                oninput: move |e| form.write().date_time = e.value(),
                            }

                            label { "Client *" }
                            select {
                                value: "{form.read().client}",
                                onchange: move |e| form.write().client = e.value(),
                                option { value: "", "Select a client" }
                                for client in data.clients.iter() {
                                    option {
                                        value: "{client.id}",
                                        selected: form.read().client == client.id.to_string(),
                                        "{client.full_name()}"
                                    }
                                }
                            }

                            label { "Employee *" }
                            select {
                                value: "{form.read().employee}",
                                onchange: move |e| form.write().employee = e.value(),
                                option { value: "", "Select an employee" }
                                for employee in data.employees.iter() {
                                    option {
                                        value: "{employee.id}",
                                        selected: form.read().employee == employee.id.to_string(),
                                        "{employee.full_name()}"
                                    }
                                }
                            }

                            label { "Service *" }
                            select {
                                value: "{form.read().service}",
                                onchange: move |e| form.write().service = e.value(),
                                option { value: "", "Select a service" }
                                for service in data.services.iter() {
                                    option {
                                        value: "{service.id}",
                                        selected: form.read().service == service.id.to_string(),
                                        "{service.name} - {service.price:.2}€"
                                    }
                                }
                            }

                            label { "Status *" }
                            select {
                                value: "{form.read().status.as_str()}",
                                onchange: move |e| {
                                    if let Ok(status) = e.value().parse() {
                                        form.write().status = status;
                                    }
                                },
                                for status in AppointmentStatus::ALL {
                                    option {
                                        value: status.as_str(),
                                        selected: form.read().status == status,
                                        "{status.label()}"
                                    }
                                }
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
}

/// One appointment table row.
#[component]
fn AppointmentRow(
    appointment: Appointment,
    on_edit: EventHandler<Appointment>,
    on_delete: EventHandler<i64>,
) -> Element {
    let id = appointment.id;
    let edit_target = appointment.clone();
    let when = format_date_time(&appointment.date_time);

    rsx! {
        tr {
            td { "{when}" }
            td { "{appointment.client_name}" }
            td { "{appointment.employee_name}" }
            td { "{appointment.service_name}" }
            td {
                span { class: appointment.status.badge_class(), "{appointment.status.label()}" }
            }
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
    fn test_appointment_form_defaults_employee_to_current_user() {
        let form = AppointmentForm::new_for(Some(7));
        assert_eq!(form.employee, "7");
        assert_eq!(form.status, AppointmentStatus::Confirmed);

        let form = AppointmentForm::new_for(None);
        assert_eq!(form.employee, "");
    }

    #[test]
    fn test_appointment_form_requires_selections() {
        let mut form = AppointmentForm {
            date_time: "2026-08-29T14:30".into(),
            client: "".into(),
            employee: "2".into(),
            service: "3".into(),
            status: AppointmentStatus::Confirmed,
            notes: String::new(),
        };
        assert!(form.to_payload().is_err());

        form.client = "1".into();
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.client, 1);
        assert_eq!(payload.employee, 2);
        assert_eq!(payload.service, 3);
    }

    #[test]
    fn test_appointment_form_prefills_truncated_datetime() {
        let appointment = Appointment {
            id: 4,
            date_time: "2026-08-29T14:30:00".into(),
            client: 1,
            employee: 2,
            service: 3,
            status: AppointmentStatus::Completed,
            notes: Some("color retouch".into()),
            client_name: "Anna Leroy".into(),
            employee_name: "Marie Dupont".into(),
            service_name: "Color".into(),
        };
        let form = AppointmentForm::from_record(&appointment);
        assert_eq!(form.date_time, "2026-08-29T14:30");
        assert_eq!(form.status, AppointmentStatus::Completed);
        assert_eq!(form.notes, "color retouch");
    }
}
