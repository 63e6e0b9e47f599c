//! Shared UI components for the admin client.

pub mod layout;
pub mod modal;
pub mod sidebar;

pub use layout::Layout;
pub use modal::Modal;
pub use sidebar::Sidebar;
