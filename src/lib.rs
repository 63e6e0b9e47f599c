//! Salon admin client
//!
//! A single-page web client for a hair-salon management API, built with
//! Dioxus. Staff log in, then manage clients, services, appointments,
//! product stock and employees, and review revenue reports. Every data
//! operation is a thin REST call against the remote API; the client keeps
//! no durable state beyond the cached session.

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (routing, pages, components)
pub mod app;

// API gateway client
pub mod api;

// Report CSV export
pub mod export;

// Wire and domain types
pub mod models;

// Session store (authentication state + role checks)
pub mod session;
