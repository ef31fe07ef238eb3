//! Event repository implementation

use chrono::Utc;
use sqlx::PgPool;

use crate::models::event::{
    CreateEventRequest, Event, EventFilter, EventParticipant, EventState,
    RegisterParticipantRequest,
};
use crate::utils::errors::CampusEventsError;

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event. The id and `registered_at` are assigned here;
    /// an omitted state falls back to `registered`.
    pub async fn create(&self, request: CreateEventRequest) -> Result<Event, CampusEventsError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (title, description, category, starts_at, ends_at, state, organizer_id, facility_id, endorsement_path, registered_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, title, description, category, starts_at, ends_at, state, organizer_id, facility_id, endorsement_path, registered_at
            "#
        )
        .bind(request.title)
        .bind(request.description)
        .bind(request.category)
        .bind(request.starts_at)
        .bind(request.ends_at)
        .bind(request.state.unwrap_or_default())
        .bind(request.organizer_id)
        .bind(request.facility_id)
        .bind(request.endorsement_path)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Event>, CampusEventsError> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, title, description, category, starts_at, ends_at, state, organizer_id, facility_id, endorsement_path, registered_at FROM events WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Overwrite every mutable column of an event row with the values in
    /// `event`. The organizer reference and registration timestamp are fixed
    /// at creation and never rewritten.
    ///
    /// Returns `None` when the row no longer exists, which callers surface
    /// as not-found rather than inserting anew.
    pub async fn replace(&self, event: &Event) -> Result<Option<Event>, CampusEventsError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET title = $2,
                description = $3,
                category = $4,
                starts_at = $5,
                ends_at = $6,
                state = $7,
                facility_id = $8,
                endorsement_path = $9
            WHERE id = $1
            RETURNING id, title, description, category, starts_at, ends_at, state, organizer_id, facility_id, endorsement_path, registered_at
            "#
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.category)
        .bind(event.starts_at)
        .bind(event.ends_at)
        .bind(event.state)
        .bind(event.facility_id)
        .bind(&event.endorsement_path)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Delete an event. Participations, sponsorships, and the evaluation go
    /// with it through the schema's cascade rules.
    pub async fn delete(&self, id: i64) -> Result<bool, CampusEventsError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List events matching `filter` with pagination.
    ///
    /// Ordering is `starts_at` descending, ties broken by id descending.
    pub async fn list(
        &self,
        filter: &EventFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Event>, CampusEventsError> {
        let search = filter.search.as_ref().map(|term| format!("%{}%", term));
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, description, category, starts_at, ends_at, state, organizer_id, facility_id, endorsement_path, registered_at
            FROM events
            WHERE ($1::text IS NULL OR title ILIKE $1 OR description ILIKE $1)
              AND ($2::text IS NULL OR category = $2)
              AND ($3::text IS NULL OR state = $3)
              AND ($4::timestamptz IS NULL OR starts_at >= $4)
              AND ($5::timestamptz IS NULL OR ends_at <= $5)
            ORDER BY starts_at DESC, id DESC
            LIMIT $6 OFFSET $7
            "#
        )
        .bind(search)
        .bind(filter.category)
        .bind(filter.state)
        .bind(filter.starts_after)
        .bind(filter.ends_before)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Associate a user with an event.
    ///
    /// The partial unique index on principals rejects a second principal
    /// for the same event; that surfaces as a conflict.
    pub async fn register_participant(
        &self,
        request: RegisterParticipantRequest,
    ) -> Result<EventParticipant, CampusEventsError> {
        let participant = sqlx::query_as::<_, EventParticipant>(
            r#"
            INSERT INTO event_participants (event_id, user_id, is_principal, endorsement_kind, endorsement_path)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, event_id, user_id, is_principal, endorsement_kind, endorsement_path
            "#
        )
        .bind(request.event_id)
        .bind(request.user_id)
        .bind(request.is_principal)
        .bind(request.endorsement_kind)
        .bind(request.endorsement_path)
        .fetch_one(&self.pool)
        .await?;

        Ok(participant)
    }

    /// Remove a user's association with an event.
    pub async fn remove_participant(
        &self,
        event_id: i64,
        user_id: i64,
    ) -> Result<bool, CampusEventsError> {
        let result =
            sqlx::query("DELETE FROM event_participants WHERE event_id = $1 AND user_id = $2")
                .bind(event_id)
                .bind(user_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Get the participants of an event, principal first.
    pub async fn get_participants(
        &self,
        event_id: i64,
    ) -> Result<Vec<EventParticipant>, CampusEventsError> {
        let participants = sqlx::query_as::<_, EventParticipant>(
            "SELECT id, event_id, user_id, is_principal, endorsement_kind, endorsement_path FROM event_participants WHERE event_id = $1 ORDER BY is_principal DESC, id ASC"
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(participants)
    }

    /// Count total events
    pub async fn count(&self) -> Result<i64, CampusEventsError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    /// Count events currently in the given lifecycle state
    pub async fn count_in_state(&self, state: EventState) -> Result<i64, CampusEventsError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events WHERE state = $1")
            .bind(state)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
