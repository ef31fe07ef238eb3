//! Event model and the validation/merge rules of the approval lifecycle
//!
//! The event is the aggregate root: everything else (participants,
//! sponsors, evaluations, notifications) hangs off it by id. Creation and
//! partial update both funnel through the pure rules in this module; the
//! repositories only ever see records that already satisfy them, except for
//! referential checks which stay with Postgres.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::patch::PatchField;
use crate::utils::errors::{CampusEventsError, Result};

/// Title length bounds, in characters.
pub const TITLE_MIN_LEN: usize = 3;
pub const TITLE_MAX_LEN: usize = 180;
/// Free-text description cap, in characters.
pub const DESCRIPTION_MAX_LEN: usize = 280;
/// Path references are plain strings, never resolved by this crate.
pub const DOCUMENT_PATH_MAX_LEN: usize = 255;

/// Event category, a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "camelCase")]
#[sqlx(type_name = "text", rename_all = "camelCase")]
pub enum EventCategory {
    Academic,
    Recreational,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Academic => "academic",
            EventCategory::Recreational => "recreational",
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of an event.
///
/// `approved` and `rejected` are terminal. The service layer only enforces
/// that a supplied value belongs to this set; it does not check that a
/// transition is reachable from the current state, so a direct client patch
/// of the field is accepted as an explicit override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "camelCase")]
#[sqlx(type_name = "text", rename_all = "camelCase")]
pub enum EventState {
    /// Initial state of every freshly created event.
    #[default]
    Registered,
    UnderReview,
    Approved,
    Rejected,
}

impl EventState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventState::Registered => "registered",
            EventState::UnderReview => "underReview",
            EventState::Approved => "approved",
            EventState::Rejected => "rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, EventState::Approved | EventState::Rejected)
    }
}

impl std::fmt::Display for EventState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: EventCategory,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub state: EventState,
    pub organizer_id: i64,
    pub facility_id: i64,
    pub endorsement_path: String,
    pub registered_at: Option<DateTime<Utc>>,
}

/// Creation payload. Multi-word fields accept both the canonical camelCase
/// spelling and the snake_case one; responses always emit camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub category: EventCategory,
    #[serde(alias = "organizer_id")]
    pub organizer_id: i64,
    #[serde(alias = "facility_id")]
    pub facility_id: i64,
    #[serde(alias = "starts_at")]
    pub starts_at: DateTime<Utc>,
    #[serde(alias = "ends_at")]
    pub ends_at: DateTime<Utc>,
    #[serde(alias = "endorsement_path")]
    pub endorsement_path: String,
    /// Falls back to `registered` when omitted.
    pub state: Option<EventState>,
}

impl CreateEventRequest {
    /// Field and cross-field checks for creation. Pure: referential checks
    /// (organizer, facility) are left to the store's foreign keys.
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)?;
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        validate_endorsement_path(&self.endorsement_path)?;
        validate_date_range(self.starts_at, self.ends_at)
    }
}

/// Sparse update payload.
///
/// Every field is tri-state (see [`PatchField`]): an omitted key leaves the
/// stored value untouched, an explicit null clears the field where the model
/// allows it (only `description`) and is a validation error everywhere else.
/// The organizer reference is fixed at creation and deliberately absent
/// here. Keys that match no field are collected into `unknown` instead of
/// failing deserialization; see `EventService::update_event` for how they
/// are handled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[serde(default, skip_serializing_if = "PatchField::is_missing")]
    pub title: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_missing")]
    pub description: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_missing")]
    pub category: PatchField<EventCategory>,
    #[serde(default, alias = "facility_id", skip_serializing_if = "PatchField::is_missing")]
    pub facility_id: PatchField<i64>,
    #[serde(default, alias = "starts_at", skip_serializing_if = "PatchField::is_missing")]
    pub starts_at: PatchField<DateTime<Utc>>,
    #[serde(default, alias = "ends_at", skip_serializing_if = "PatchField::is_missing")]
    pub ends_at: PatchField<DateTime<Utc>>,
    #[serde(default, alias = "endorsement_path", skip_serializing_if = "PatchField::is_missing")]
    pub endorsement_path: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_missing")]
    pub state: PatchField<EventState>,
    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_json::Value>,
}

impl UpdateEventRequest {
    /// Names of patch keys that match no known field.
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.unknown.keys().map(String::as_str).collect()
    }

    /// Overlay this patch on `base` and validate the result.
    ///
    /// Per-field constraints run only for fields actually supplied; the
    /// date-range invariant runs against the merged values whenever either
    /// bound is touched, which is what forces reading the base record before
    /// an update. The returned record is complete and is written back as a
    /// whole-row overwrite.
    pub fn merge_into(&self, base: &Event) -> Result<Event> {
        let title = match &self.title {
            PatchField::Missing => base.title.clone(),
            PatchField::Null => return Err(CampusEventsError::validation("title", "cannot be null")),
            PatchField::Value(title) => {
                validate_title(title)?;
                title.clone()
            }
        };

        let description = match &self.description {
            PatchField::Missing => base.description.clone(),
            PatchField::Null => None,
            PatchField::Value(description) => {
                validate_description(description)?;
                Some(description.clone())
            }
        };

        let category = match &self.category {
            PatchField::Missing => base.category,
            PatchField::Null => {
                return Err(CampusEventsError::validation("category", "cannot be null"))
            }
            PatchField::Value(category) => *category,
        };

        let facility_id = match &self.facility_id {
            PatchField::Missing => base.facility_id,
            PatchField::Null => {
                return Err(CampusEventsError::validation("facilityId", "cannot be null"))
            }
            PatchField::Value(facility_id) => *facility_id,
        };

        let starts_at = match &self.starts_at {
            PatchField::Missing => base.starts_at,
            PatchField::Null => {
                return Err(CampusEventsError::validation("startsAt", "cannot be null"))
            }
            PatchField::Value(starts_at) => *starts_at,
        };

        let ends_at = match &self.ends_at {
            PatchField::Missing => base.ends_at,
            PatchField::Null => {
                return Err(CampusEventsError::validation("endsAt", "cannot be null"))
            }
            PatchField::Value(ends_at) => *ends_at,
        };

        let endorsement_path = match &self.endorsement_path {
            PatchField::Missing => base.endorsement_path.clone(),
            PatchField::Null => {
                return Err(CampusEventsError::validation("endorsementPath", "cannot be null"))
            }
            PatchField::Value(path) => {
                validate_endorsement_path(path)?;
                path.clone()
            }
        };

        let state = match &self.state {
            PatchField::Missing => base.state,
            PatchField::Null => return Err(CampusEventsError::validation("state", "cannot be null")),
            PatchField::Value(state) => *state,
        };

        if !self.starts_at.is_missing() || !self.ends_at.is_missing() {
            validate_date_range(starts_at, ends_at)?;
        }

        Ok(Event {
            id: base.id,
            title,
            description,
            category,
            starts_at,
            ends_at,
            state,
            organizer_id: base.organizer_id,
            facility_id,
            endorsement_path,
            registered_at: base.registered_at,
        })
    }
}

/// Listing filters; all optional and combinable. `search` matches title or
/// description, case-insensitively.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilter {
    pub search: Option<String>,
    pub category: Option<EventCategory>,
    pub state: Option<EventState>,
    #[serde(alias = "starts_after")]
    pub starts_after: Option<DateTime<Utc>>,
    #[serde(alias = "ends_before")]
    pub ends_before: Option<DateTime<Utc>>,
}

/// Kind of endorsement document backing a participation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "camelCase")]
#[sqlx(type_name = "text", rename_all = "camelCase")]
pub enum EndorsementKind {
    ProgramDirector,
    TeachingDirector,
}

impl EndorsementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndorsementKind::ProgramDirector => "programDirector",
            EndorsementKind::TeachingDirector => "teachingDirector",
        }
    }
}

/// User↔Event association. Rows are cascade-deleted with their event; the
/// user side is delete-restricted while a row exists.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct EventParticipant {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
    pub is_principal: bool,
    pub endorsement_kind: Option<EndorsementKind>,
    pub endorsement_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterParticipantRequest {
    #[serde(alias = "event_id")]
    pub event_id: i64,
    #[serde(alias = "user_id")]
    pub user_id: i64,
    /// At most one participant per event may carry this flag; the schema
    /// rejects a second principal with a conflict.
    #[serde(default, alias = "is_principal")]
    pub is_principal: bool,
    #[serde(alias = "endorsement_kind")]
    pub endorsement_kind: Option<EndorsementKind>,
    #[serde(alias = "endorsement_path")]
    pub endorsement_path: Option<String>,
}

fn validate_title(title: &str) -> Result<()> {
    let len = title.chars().count();
    if len < TITLE_MIN_LEN {
        return Err(CampusEventsError::validation(
            "title",
            format!("must be at least {TITLE_MIN_LEN} characters"),
        ));
    }
    if len > TITLE_MAX_LEN {
        return Err(CampusEventsError::validation(
            "title",
            format!("must be at most {TITLE_MAX_LEN} characters"),
        ));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<()> {
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(CampusEventsError::validation(
            "description",
            format!("must be at most {DESCRIPTION_MAX_LEN} characters"),
        ));
    }
    Ok(())
}

fn validate_endorsement_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CampusEventsError::validation(
            "endorsementPath",
            "must not be empty",
        ));
    }
    if path.chars().count() > DOCUMENT_PATH_MAX_LEN {
        return Err(CampusEventsError::validation(
            "endorsementPath",
            format!("must be at most {DOCUMENT_PATH_MAX_LEN} characters"),
        ));
    }
    Ok(())
}

fn validate_date_range(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Result<()> {
    if ends_at < starts_at {
        return Err(CampusEventsError::validation(
            "endsAt",
            "must not precede startsAt",
        ));
    }
    Ok(())
}
