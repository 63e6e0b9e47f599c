//! Page components, one per feature view.
//!
//! Every CRUD page follows the same shape: a `use_resource` list fetch, a
//! modal form for create/update, delete with confirmation, and a full
//! refetch after every successful mutation (no optimistic updates).

mod appointments;
mod clients;
mod dashboard;
mod employees;
mod login;
mod products;
mod reports;
mod services;

pub use appointments::Appointments;
pub use clients::Clients;
pub use dashboard::Dashboard;
pub use employees::Employees;
pub use login::Login;
pub use products::Products;
pub use reports::Reports;
pub use services::Services;
