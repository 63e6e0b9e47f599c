//! Overlay + dialog shell used by every create/update form.

use dioxus::prelude::*;

/// Modal dialog. Clicking the overlay or the close button cancels without
/// submitting anything.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal-content card",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "close-btn",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                {children}
            }
        }
    }
}
