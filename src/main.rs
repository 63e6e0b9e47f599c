//! Salon admin client entry point.

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(salon_admin::app::App);
}
