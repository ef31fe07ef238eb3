//! Test helpers module
//!
//! Shared setup for the integration suites: a disposable PostgreSQL
//! database with the embedded migrations applied, and seed-data builders
//! for the directory entities.

pub mod database_helper;
pub mod test_data;

pub use database_helper::*;
pub use test_data::*;
