//! Event service implementation
//!
//! The core of the approval lifecycle: creation validation, filtered
//! listing, merge-based partial updates, deletion, and participant
//! management all pass through here before anything touches the store.

use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::database::repositories::{EventRepository, UserRepository};
use crate::models::event::{
    CreateEventRequest, Event, EventFilter, EventParticipant, RegisterParticipantRequest,
    UpdateEventRequest,
};
use crate::utils::errors::{CampusEventsError, Result};
use crate::utils::helpers::validate_page;
use crate::utils::logging::log_event_action;

/// Event service for the registration and approval lifecycle
#[derive(Clone)]
pub struct EventService {
    event_repository: EventRepository,
    user_repository: UserRepository,
    settings: Settings,
}

impl EventService {
    /// Create a new EventService instance
    pub fn new(
        event_repository: EventRepository,
        user_repository: UserRepository,
        settings: Settings,
    ) -> Self {
        Self {
            event_repository,
            user_repository,
            settings,
        }
    }

    /// Validate and register a new event.
    ///
    /// Validation is pure; the organizer and facility references are not
    /// pre-checked here, so a dangling reference surfaces as a conflict
    /// from the store.
    pub async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
        debug!(title = %request.title, category = %request.category, "Creating event");
        request.validate()?;

        let event = self.event_repository.create(request).await?;
        log_event_action(event.id, "registered", Some(event.state.as_str()));
        Ok(event)
    }

    /// Get event by ID
    pub async fn get_event(&self, event_id: i64) -> Result<Event> {
        debug!(event_id = event_id, "Fetching event");
        self.event_repository
            .find_by_id(event_id)
            .await?
            .ok_or(CampusEventsError::EventNotFound { event_id })
    }

    /// List events matching `filter`.
    ///
    /// `limit` falls back to the configured default page size and must not
    /// exceed the configured maximum.
    pub async fn list_events(
        &self,
        filter: EventFilter,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Event>> {
        let limit = limit.unwrap_or(self.settings.listing.default_page_size);
        let offset = offset.unwrap_or(0);
        validate_page(limit, offset, self.settings.listing.max_page_size)?;

        debug!(limit = limit, offset = offset, "Listing events");
        self.event_repository.list(&filter, limit, offset).await
    }

    /// Apply a sparse patch to an event.
    ///
    /// The stored record is fetched first so cross-field rules run against
    /// the merged values, then the result is written back as a whole-row
    /// overwrite. Keys that match no patchable field are ignored, unless
    /// `features.strict_patches` turns them into a validation failure.
    pub async fn update_event(&self, event_id: i64, request: UpdateEventRequest) -> Result<Event> {
        debug!(event_id = event_id, "Updating event");

        let unknown = request.unknown_keys();
        if !unknown.is_empty() {
            if self.settings.features.strict_patches {
                return Err(CampusEventsError::validation(
                    "patch",
                    format!("unknown fields: {}", unknown.join(", ")),
                ));
            }
            debug!(event_id = event_id, fields = ?unknown, "Ignoring unknown patch fields");
        }

        let base = self
            .event_repository
            .find_by_id(event_id)
            .await?
            .ok_or(CampusEventsError::EventNotFound { event_id })?;

        let merged = request.merge_into(&base)?;

        // The row can vanish between the read and the write; treat that the
        // same as it never existing.
        let event = self
            .event_repository
            .replace(&merged)
            .await?
            .ok_or(CampusEventsError::EventNotFound { event_id })?;

        log_event_action(event.id, "updated", Some(event.state.as_str()));
        Ok(event)
    }

    /// Delete an event. Dependent participations, sponsorships, and the
    /// evaluation are removed by the schema's cascade rules.
    pub async fn delete_event(&self, event_id: i64) -> Result<()> {
        debug!(event_id = event_id, "Deleting event");

        if !self.event_repository.delete(event_id).await? {
            warn!(event_id = event_id, "Delete targeted a missing event");
            return Err(CampusEventsError::EventNotFound { event_id });
        }

        log_event_action(event_id, "deleted", None);
        Ok(())
    }

    /// Associate a user with an event.
    ///
    /// Both sides of the association are checked up front for precise
    /// not-found errors; a race against a concurrent delete still surfaces
    /// as a conflict from the store, as does a second principal.
    pub async fn register_participant(
        &self,
        request: RegisterParticipantRequest,
    ) -> Result<EventParticipant> {
        let event_id = request.event_id;
        let user_id = request.user_id;
        debug!(event_id = event_id, user_id = user_id, "Registering participant");

        self.event_repository
            .find_by_id(event_id)
            .await?
            .ok_or(CampusEventsError::EventNotFound { event_id })?;
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(CampusEventsError::UserNotFound { user_id })?;

        let participant = self.event_repository.register_participant(request).await?;
        info!(
            event_id = event_id,
            user_id = user_id,
            is_principal = participant.is_principal,
            "Participant registered"
        );
        Ok(participant)
    }

    /// Remove a user's association with an event. Returns whether an
    /// association existed.
    pub async fn remove_participant(&self, event_id: i64, user_id: i64) -> Result<bool> {
        debug!(event_id = event_id, user_id = user_id, "Removing participant");
        let removed = self
            .event_repository
            .remove_participant(event_id, user_id)
            .await?;
        if removed {
            info!(event_id = event_id, user_id = user_id, "Participant removed");
        }
        Ok(removed)
    }

    /// List the participants of an event, principal first
    pub async fn list_participants(&self, event_id: i64) -> Result<Vec<EventParticipant>> {
        debug!(event_id = event_id, "Listing participants");

        self.event_repository
            .find_by_id(event_id)
            .await?
            .ok_or(CampusEventsError::EventNotFound { event_id })?;

        self.event_repository.get_participants(event_id).await
    }
}
