//! Products (stock) page component.
//!
//! Stock table with low-stock highlighting, modal form and confirmed
//! deletes.

use dioxus::prelude::*;

use crate::api;
use crate::app::components::{Layout, Modal};
use crate::app::confirm;
use crate::models::{Product, ProductPayload};

/// Form state for the product modal; numeric fields parsed at submit.
#[derive(Debug, Clone, PartialEq)]
struct ProductForm {
    name: String,
    quantity: String,
    purchase_price: String,
    low_stock_alert: String,
    notes: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: String::new(),
            purchase_price: String::new(),
            // Matches the server default threshold.
            low_stock_alert: "5".into(),
            notes: String::new(),
        }
    }
}

impl ProductForm {
    fn from_record(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            quantity: product.quantity.to_string(),
            purchase_price: format!("{}", product.purchase_price),
            low_stock_alert: product.low_stock_alert.to_string(),
            notes: product.notes.clone().unwrap_or_default(),
        }
    }

    fn to_payload(&self) -> Result<ProductPayload, String> {
        if self.name.trim().is_empty() {
            return Err("A product name is required.".into());
        }
        let quantity: i32 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| "Quantity must be a whole number.".to_string())?;
        let purchase_price: f64 = self
            .purchase_price
            .trim()
            .parse()
            .map_err(|_| "Purchase price must be a number.".to_string())?;
        let low_stock_alert: i32 = self
            .low_stock_alert
            .trim()
            .parse()
            .map_err(|_| "Alert threshold must be a whole number.".to_string())?;
        Ok(ProductPayload {
            name: self.name.trim().to_string(),
            quantity,
            purchase_price,
            low_stock_alert,
            notes: self.notes.clone(),
        })
    }
}

/// Products page component.
#[component]
pub fn Products() -> Element {
    let mut products = use_resource(|| async {
        api::fetch_json::<Vec<Product>>(api::PRODUCTS)
            .await
            .inspect_err(|err| tracing::error!(%err, "failed to load products"))
            .ok()
    });

    let mut modal_open = use_signal(|| false);
    let mut editing_id = use_signal(|| None::<i64>);
    let mut form = use_signal(ProductForm::default);
    let mut form_error = use_signal(|| None::<String>);

    let open_create = move |_| {
        editing_id.set(None);
        form.set(ProductForm::default());
        form_error.set(None);
        modal_open.set(true);
    };

    let open_edit = move |product: Product| {
        editing_id.set(Some(product.id));
        form.set(ProductForm::from_record(&product));
        form_error.set(None);
        modal_open.set(true);
    };

    let delete = move |id: i64| {
        if !confirm("Delete this product?") {
            return;
        }
        spawn(async move {
            match api::delete(&api::item(api::PRODUCTS, id)).await {
                Ok(()) => products.restart(),
                Err(err) => tracing::error!(%err, "failed to delete product"),
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
                    api::put_json::<_, serde_json::Value>(&api::item(api::PRODUCTS, id), &payload)
                        .await
                }
                None => api::post_json::<_, serde_json::Value>(api::PRODUCTS, &payload).await,
            };
            match result {
                Ok(_) => {
                    modal_open.set(false);
                    products.restart();
                }
                Err(err) => form_error.set(Some(err.to_string())),
            }
        });
    };

    let loaded = products.read().clone();
    let content = match loaded {
        None => rsx! {
            div { class: "card", aria_busy: "true", "Loading..." }
        },
        Some(None) => rsx! {
            div { class: "card status-err", "Could not load products. Please reload the page." }
        },
        Some(Some(list)) => rsx! {
            div { class: "card table-container",
                table {
                    thead {
                        tr {
                            th { "Product" }
                            th { "Quantity" }
                            th { "Purchase price" }
                            th { "Alert threshold" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for product in list {
                            ProductRow {
                                key: "{product.id}",
                                product: product.clone(),
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
            title: "Stock".to_string(),
            nav_active: "products".to_string(),

            div { class: "page-header",
                h1 { "Stock" }
                button { onclick: open_create, "New product" }
            }

            {content}

            if modal_open() {
                Modal {
                    title: (if editing_id().is_some() { "Edit product" } else { "New product" }).to_string(),
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

                        label { "Quantity *" }
                        input {
                            r#type: "number",
                            value: "{form.read().quantity}",
                            oninput: move |e| form.write().quantity = e.value(),
                        }

                        label { "Purchase price (€) *" }
                        input {
                            r#type: "number",
                            step: "0.01",
                            value: "{form.read().purchase_price}",
                            oninput: move |e| form.write().purchase_price = e.value(),
                        }

                        label { "Low stock alert *" }
                        input {
                            r#type: "number",
                            value: "{form.read().low_stock_alert}",
                            oninput: move |e| form.write().low_stock_alert = e.value(),
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

/// One product table row; low stock rows carry a highlight class and a
/// warning badge.
#[component]
fn ProductRow(
    product: Product,
    on_edit: EventHandler<Product>,
    on_delete: EventHandler<i64>,
) -> Element {
    let id = product.id;
    let edit_target = product.clone();
    let row_class = if product.is_low_stock() { "low-stock" } else { "" };

    rsx! {
        tr { class: row_class,
            td { "{product.name}" }
            td {
                "{product.quantity}"
                if product.is_low_stock() {
                    " "
                    span { class: "badge badge-warning", "low" }
                }
            }
            td { "{product.purchase_price:.2}€" }
            td { "{product.low_stock_alert}" }
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
    fn test_product_form_default_threshold() {
        let form = ProductForm::default();
        assert_eq!(form.low_stock_alert, "5");
    }

    #[test]
    fn test_product_form_parses_numeric_fields() {
        let form = ProductForm {
            name: "Shampoo".into(),
            quantity: "12".into(),
            purchase_price: "8.50".into(),
            low_stock_alert: "3".into(),
            notes: String::new(),
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.quantity, 12);
        assert_eq!(payload.purchase_price, 8.5);
        assert_eq!(payload.low_stock_alert, 3);
    }

    #[test]
    fn test_product_form_rejects_bad_numbers() {
        let form = ProductForm {
            name: "Shampoo".into(),
            quantity: "a dozen".into(),
            purchase_price: "8.50".into(),
            low_stock_alert: "3".into(),
            notes: String::new(),
        };
        assert!(form.to_payload().is_err());
    }
}
