//! Organization repository implementation
//!
//! Sponsorship rows (the Event↔Organization join) are owned by this
//! repository as well.

use sqlx::PgPool;

use crate::models::organization::{
    CreateOrganizationRequest, EventSponsor, Organization, SponsorEventRequest,
    UpdateOrganizationRequest,
};
use crate::utils::errors::CampusEventsError;

#[derive(Debug, Clone)]
pub struct OrganizationRepository {
    pool: PgPool,
}

impl OrganizationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new organization
    pub async fn create(
        &self,
        request: CreateOrganizationRequest,
    ) -> Result<Organization, CampusEventsError> {
        let organization = sqlx::query_as::<_, Organization>(
            r#"
            INSERT INTO organizations (name, legal_representative, main_activity, phone, location, economic_sector)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, legal_representative, main_activity, phone, location, economic_sector
            "#
        )
        .bind(request.name)
        .bind(request.legal_representative)
        .bind(request.main_activity)
        .bind(request.phone)
        .bind(request.location)
        .bind(request.economic_sector)
        .fetch_one(&self.pool)
        .await?;

        Ok(organization)
    }

    /// Find organization by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Organization>, CampusEventsError> {
        let organization = sqlx::query_as::<_, Organization>(
            "SELECT id, name, legal_representative, main_activity, phone, location, economic_sector FROM organizations WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(organization)
    }

    /// Patch the provided organization columns; absent fields keep their
    /// stored value. Returns `None` when the row does not exist.
    pub async fn update(
        &self,
        id: i64,
        request: UpdateOrganizationRequest,
    ) -> Result<Option<Organization>, CampusEventsError> {
        let organization = sqlx::query_as::<_, Organization>(
            r#"
            UPDATE organizations
            SET name = COALESCE($2, name),
                legal_representative = COALESCE($3, legal_representative),
                main_activity = COALESCE($4, main_activity),
                phone = COALESCE($5, phone),
                location = COALESCE($6, location),
                economic_sector = COALESCE($7, economic_sector)
            WHERE id = $1
            RETURNING id, name, legal_representative, main_activity, phone, location, economic_sector
            "#
        )
        .bind(id)
        .bind(request.name)
        .bind(request.legal_representative)
        .bind(request.main_activity)
        .bind(request.phone)
        .bind(request.location)
        .bind(request.economic_sector)
        .fetch_optional(&self.pool)
        .await?;

        Ok(organization)
    }

    /// Delete an organization. Restricted while a sponsorship refers to the
    /// row; that surfaces as a conflict.
    pub async fn delete(&self, id: i64) -> Result<bool, CampusEventsError> {
        let result = sqlx::query("DELETE FROM organizations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List all organizations with pagination, newest first
    pub async fn list(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Organization>, CampusEventsError> {
        let organizations = sqlx::query_as::<_, Organization>(
            "SELECT id, name, legal_representative, main_activity, phone, location, economic_sector FROM organizations ORDER BY id DESC LIMIT $1 OFFSET $2"
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(organizations)
    }

    /// Link an organization to an event as a sponsor.
    ///
    /// One sponsorship per (event, organization) pair; a duplicate surfaces
    /// as a conflict.
    pub async fn add_sponsor(
        &self,
        request: SponsorEventRequest,
    ) -> Result<EventSponsor, CampusEventsError> {
        let sponsor = sqlx::query_as::<_, EventSponsor>(
            r#"
            INSERT INTO event_sponsors (event_id, organization_id, certificate_path, participant, is_legal_representative)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, event_id, organization_id, certificate_path, participant, is_legal_representative
            "#
        )
        .bind(request.event_id)
        .bind(request.organization_id)
        .bind(request.certificate_path)
        .bind(request.participant)
        .bind(request.is_legal_representative)
        .fetch_one(&self.pool)
        .await?;

        Ok(sponsor)
    }

    /// Remove an organization's sponsorship of an event.
    pub async fn remove_sponsor(
        &self,
        event_id: i64,
        organization_id: i64,
    ) -> Result<bool, CampusEventsError> {
        let result = sqlx::query(
            "DELETE FROM event_sponsors WHERE event_id = $1 AND organization_id = $2",
        )
        .bind(event_id)
        .bind(organization_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Get the sponsors of an event
    pub async fn get_event_sponsors(
        &self,
        event_id: i64,
    ) -> Result<Vec<EventSponsor>, CampusEventsError> {
        let sponsors = sqlx::query_as::<_, EventSponsor>(
            "SELECT id, event_id, organization_id, certificate_path, participant, is_legal_representative FROM event_sponsors WHERE event_id = $1 ORDER BY id ASC"
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(sponsors)
    }

    /// Count total organizations
    pub async fn count(&self) -> Result<i64, CampusEventsError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM organizations")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
