//! Employees page component (owner only).
//!
//! Card grid of staff accounts. Editing with a blank password keeps the
//! current one; the field is only required when creating.

use dioxus::prelude::*;

use crate::api;
use crate::app::components::{Layout, Modal};
use crate::app::confirm;
use crate::models::{Employee, EmployeePayload, Role};

/// Form state for the employee modal.
#[derive(Debug, Clone, Default, PartialEq)]
struct EmployeeForm {
    username: String,
    email: String,
    password: String,
    first_name: String,
    last_name: String,
    role: Role,
    phone: String,
    specialties: String,
}

impl EmployeeForm {
    fn from_record(employee: &Employee) -> Self {
        Self {
            username: employee.username.clone(),
            email: employee.email.clone(),
            password: String::new(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            role: employee.role,
            phone: employee.phone.clone().unwrap_or_default(),
            specialties: employee.specialties.clone().unwrap_or_default(),
        }
    }

    /// `editing` relaxes the password requirement: blank means keep the
    /// current password and the field is omitted from the payload.
    fn to_payload(&self, editing: bool) -> Result<EmployeePayload, String> {
        if self.username.trim().is_empty()
            || self.first_name.trim().is_empty()
            || self.last_name.trim().is_empty()
        {
            return Err("Username, first name and last name are required.".into());
        }
        let password = match self.password.trim() {
            "" if editing => None,
            "" => return Err("A password is required for a new employee.".into()),
            password => Some(password.to_string()),
        };
        Ok(EmployeePayload {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            role: self.role,
            phone: self.phone.clone(),
            specialties: self.specialties.clone(),
        })
    }
}

/// Employees page component.
#[component]
pub fn Employees() -> Element {
    let mut employees = use_resource(|| async {
        api::fetch_json::<Vec<Employee>>(api::USERS)
            .await
            .inspect_err(|err| tracing::error!(%err, "failed to load employees"))
            .ok()
    });

    let mut modal_open = use_signal(|| false);
    let mut editing_id = use_signal(|| None::<i64>);
    let mut form = use_signal(EmployeeForm::default);
    let mut form_error = use_signal(|| None::<String>);

    let open_create = move |_| {
        editing_id.set(None);
        form.set(EmployeeForm::default());
        form_error.set(None);
        modal_open.set(true);
    };

    let open_edit = move |employee: Employee| {
        editing_id.set(Some(employee.id));
        form.set(EmployeeForm::from_record(&employee));
        form_error.set(None);
        modal_open.set(true);
    };

    let delete = move |id: i64| {
        if !confirm("Delete this employee account?") {
            return;
        }
        spawn(async move {
            match api::delete(&api::item(api::USERS, id)).await {
                Ok(()) => employees.restart(),
                Err(err) => tracing::error!(%err, "failed to delete employee"),
            }
        });
    };

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let editing = editing_id();
        let payload = match form.read().to_payload(editing.is_some()) {
            Ok(payload) => payload,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        spawn(async move {
            let result = match editing {
                Some(id) => {
                    api::put_json::<_, serde_json::Value>(&api::item(api::USERS, id), &payload)
                        .await
                }
                None => api::post_json::<_, serde_json::Value>(api::USERS, &payload).await,
            };
            match result {
                Ok(_) => {
                    modal_open.set(false);
                    employees.restart();
                }
                Err(err) => form_error.set(Some(err.to_string())),
            }
        });
    };

    let loaded = employees.read().clone();
    let content = match loaded {
        None => rsx! {
            div { class: "card", aria_busy: "true", "Loading..." }
        },
        Some(None) => rsx! {
            div { class: "card status-err", "Could not load employees. Please reload the page." }
        },
        Some(Some(list)) => rsx! {
            div { class: "card-grid",
                for employee in list {
                    EmployeeCard {
                        key: "{employee.id}",
                        employee: employee.clone(),
                        on_edit: open_edit,
                        on_delete: delete,
                    }
                }
            }
        },
    };

    rsx! {
        Layout {
            title: "Employees".to_string(),
            nav_active: "employees".to_string(),
            require_owner: true,

            div { class: "page-header",
                h1 { "Employees" }
                button { onclick: open_create, "New employee" }
            }

            {content}

            if modal_open() {
                Modal {
                    title: (if editing_id().is_some() { "Edit employee" } else { "New employee" }).to_string(),
                    on_close: move |_| modal_open.set(false),

                    form { onsubmit: submit,
                        if let Some(ref message) = *form_error.read() {
                            div { class: "form-error", "{message}" }
                        }

                        label { "Username *" }
                        input {
                            r#type: "text",
                            value: "{form.read().username}",
                            oninput: move |e| form.write().username = e.value(),
                        }

                        label {
                            if editing_id().is_some() { "Password (leave blank to keep current)" } else { "Password *" }
                        }
                        input {
                            r#type: "password",
                            value: "{form.read().password}",
                            oninput: move |e| form.write().password = e.value(),
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

                        label { "Email" }
                        input {
                            r#type: "email",
                            value: "{form.read().email}",
                            oninput: move |e| form.write().email = e.value(),
                        }

                        label { "Role *" }
                        select {
                            value: "{form.read().role}",
                            onchange: move |e| {
                                form.write().role = match e.value().as_str() {
                                    "owner" => Role::Owner,
                                    _ => Role::Staff,
                                };
                            },
                            option { value: "staff", selected: form.read().role == Role::Staff, "Staff" }
                            option { value: "owner", selected: form.read().role == Role::Owner, "Owner" }
                        }

                        label { "Phone" }
                        input {
                            r#type: "tel",
                            value: "{form.read().phone}",
                            oninput: move |e| form.write().phone = e.value(),
                        }

                        label { "Specialties" }
                        textarea {
                            rows: 2,
                            value: "{form.read().specialties}",
                            oninput: move |e| form.write().specialties = e.value(),
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

/// One employee card.
#[component]
fn EmployeeCard(
    employee: Employee,
    on_edit: EventHandler<Employee>,
    on_delete: EventHandler<i64>,
) -> Element {
    let id = employee.id;
    let edit_target = employee.clone();
    let phone = employee.phone.clone().unwrap_or_else(|| "-".to_string());
    let specialties = employee
        .specialties
        .clone()
        .unwrap_or_else(|| "-".to_string());
    let role_badge = match employee.role {
        Role::Owner => "badge badge-info",
        Role::Staff => "badge badge-success",
    };

    rsx! {
        div { class: "card",
            div { style: "display:flex;align-items:center;gap:0.75rem;margin-bottom:0.75rem;",
                div { class: "user-avatar", "{employee.initials()}" }
                div {
                    h3 { style: "margin:0;", "{employee.full_name()}" }
                    span { class: role_badge, "{employee.role.label()}" }
                }
            }

            div { class: "stat-label",
                div { "Email: {employee.email}" }
                div { "Phone: {phone}" }
                div { "Specialties: {specialties}" }
            }

            div { class: "actions", style: "margin-top:0.75rem;",
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

    fn filled_form() -> EmployeeForm {
        EmployeeForm {
            username: "marie".into(),
            email: "marie@salon.fr".into(),
            password: String::new(),
            first_name: "Marie".into(),
            last_name: "Dupont".into(),
            role: Role::Staff,
            phone: String::new(),
            specialties: String::new(),
        }
    }

    #[test]
    fn test_new_employee_requires_password() {
        let form = filled_form();
        assert!(form.to_payload(false).is_err());

        let form = EmployeeForm {
            password: "secret".into(),
            ..filled_form()
        };
        let payload = form.to_payload(false).unwrap();
        assert_eq!(payload.password.as_deref(), Some("secret"));
    }

    #[test]
    fn test_editing_with_blank_password_keeps_current() {
        let form = filled_form();
        let payload = form.to_payload(true).unwrap();
        assert!(payload.password.is_none());
    }

    #[test]
    fn test_form_prefill_blanks_password() {
        let employee = Employee {
            id: 2,
            username: "marie".into(),
            email: "marie@salon.fr".into(),
            first_name: "Marie".into(),
            last_name: "Dupont".into(),
            role: Role::Staff,
            phone: Some("0601020304".into()),
            specialties: Some("color".into()),
        };
        let form = EmployeeForm::from_record(&employee);
        assert_eq!(form.password, "");
        assert_eq!(form.phone, "0601020304");
        assert_eq!(form.role, Role::Staff);
    }
}
