//! Error handling for CampusEvents
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Main error type for the CampusEvents application
#[derive(Error, Debug)]
pub enum CampusEventsError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: i64 },

    #[error("Facility not found: {facility_id}")]
    FacilityNotFound { facility_id: i64 },

    #[error("Organization not found: {organization_id}")]
    OrganizationNotFound { organization_id: i64 },

    #[error("No evaluation recorded for event: {event_id}")]
    EvaluationNotFound { event_id: i64 },

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Result type alias for CampusEvents operations
pub type Result<T> = std::result::Result<T, CampusEventsError>;

impl CampusEventsError {
    /// Shorthand for a field-level validation failure
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CampusEventsError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Check if the error is recoverable by fixing the request and retrying
    pub fn is_recoverable(&self) -> bool {
        match self {
            CampusEventsError::Database(_) => false,
            CampusEventsError::Migration(_) => false,
            CampusEventsError::Config(_) => false,
            CampusEventsError::Validation { .. } => true,
            CampusEventsError::EventNotFound { .. } => false,
            CampusEventsError::UserNotFound { .. } => false,
            CampusEventsError::FacilityNotFound { .. } => false,
            CampusEventsError::OrganizationNotFound { .. } => false,
            CampusEventsError::EvaluationNotFound { .. } => false,
            CampusEventsError::Conflict(_) => false,
        }
    }

    /// Check if the error targets a missing record
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CampusEventsError::EventNotFound { .. }
                | CampusEventsError::UserNotFound { .. }
                | CampusEventsError::FacilityNotFound { .. }
                | CampusEventsError::OrganizationNotFound { .. }
                | CampusEventsError::EvaluationNotFound { .. }
        )
    }
}

/// Constraint violations reported by Postgres become `Conflict`; everything
/// else stays a plain database error. Pre-validation catches most bad input,
/// but races (e.g. a referenced facility deleted concurrently) only surface
/// here.
impl From<sqlx::Error> for CampusEventsError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::CheckViolation
                | ErrorKind::NotNullViolation => {
                    return CampusEventsError::Conflict(db_err.message().to_string());
                }
                _ => {}
            }
        }
        CampusEventsError::Database(err)
    }
}
