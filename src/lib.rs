//! CampusEvents
//!
//! A university event registration and approval tracking service.
//! This library provides the event lifecycle core (validation, partial
//! updates, the registered → underReview → approved/rejected state set),
//! the related directory entities (users, facilities, organizations), and
//! the approval flow that records evaluations and outcome notifications.
//!
//! The HTTP surface is deliberately absent: an embedding service wires the
//! exported services to its own routing layer, using [`Settings`] for
//! configuration, [`utils::logging::init_logging`] for tracing output, and
//! [`database::create_pool`]/[`database::run_migrations`] for storage.

#![allow(non_snake_case)]

pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{CampusEventsError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
