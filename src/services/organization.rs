//! Organization service implementation
//!
//! Sponsoring organizations and their event sponsorships.

use tracing::{debug, info};

use crate::config::Settings;
use crate::database::repositories::{EventRepository, OrganizationRepository};
use crate::models::organization::{
    CreateOrganizationRequest, EventSponsor, Organization, SponsorEventRequest,
    UpdateOrganizationRequest,
};
use crate::utils::errors::{CampusEventsError, Result};
use crate::utils::helpers::{validate_optional_text_field, validate_page, validate_text_field};

/// Organization service for sponsor records and event sponsorships
#[derive(Clone)]
pub struct OrganizationService {
    organization_repository: OrganizationRepository,
    event_repository: EventRepository,
    settings: Settings,
}

impl OrganizationService {
    /// Create a new OrganizationService instance
    pub fn new(
        organization_repository: OrganizationRepository,
        event_repository: EventRepository,
        settings: Settings,
    ) -> Self {
        Self {
            organization_repository,
            event_repository,
            settings,
        }
    }

    /// Validate and create an organization. Every field is required.
    pub async fn create_organization(
        &self,
        request: CreateOrganizationRequest,
    ) -> Result<Organization> {
        debug!(name = %request.name, "Creating organization");
        validate_text_field("name", &request.name, 1, 150)?;
        validate_text_field("legalRepresentative", &request.legal_representative, 1, 120)?;
        validate_text_field("mainActivity", &request.main_activity, 1, 160)?;
        validate_text_field("phone", &request.phone, 1, 40)?;
        validate_text_field("location", &request.location, 1, 150)?;
        validate_text_field("economicSector", &request.economic_sector, 1, 120)?;

        let organization = self.organization_repository.create(request).await?;
        info!(organization_id = organization.id, "Organization created");
        Ok(organization)
    }

    /// Get organization by ID
    pub async fn get_organization(&self, organization_id: i64) -> Result<Organization> {
        debug!(organization_id = organization_id, "Fetching organization");
        self.organization_repository
            .find_by_id(organization_id)
            .await?
            .ok_or(CampusEventsError::OrganizationNotFound { organization_id })
    }

    /// List organizations with pagination, newest first
    pub async fn list_organizations(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Organization>> {
        let limit = limit.unwrap_or(self.settings.listing.default_page_size);
        let offset = offset.unwrap_or(0);
        validate_page(limit, offset, self.settings.listing.max_page_size)?;

        debug!(limit = limit, offset = offset, "Listing organizations");
        self.organization_repository.list(limit, offset).await
    }

    /// Patch the provided organization fields; absent fields keep their
    /// stored value.
    pub async fn update_organization(
        &self,
        organization_id: i64,
        request: UpdateOrganizationRequest,
    ) -> Result<Organization> {
        debug!(organization_id = organization_id, "Updating organization");
        validate_optional_text_field("name", request.name.as_deref(), 1, 150)?;
        validate_optional_text_field(
            "legalRepresentative",
            request.legal_representative.as_deref(),
            1,
            120,
        )?;
        validate_optional_text_field("mainActivity", request.main_activity.as_deref(), 1, 160)?;
        validate_optional_text_field("phone", request.phone.as_deref(), 1, 40)?;
        validate_optional_text_field("location", request.location.as_deref(), 1, 150)?;
        validate_optional_text_field(
            "economicSector",
            request.economic_sector.as_deref(),
            1,
            120,
        )?;

        let organization = self
            .organization_repository
            .update(organization_id, request)
            .await?
            .ok_or(CampusEventsError::OrganizationNotFound { organization_id })?;

        info!(organization_id = organization.id, "Organization updated");
        Ok(organization)
    }

    /// Delete an organization. Fails with a conflict while a sponsorship
    /// still refers to it.
    pub async fn delete_organization(&self, organization_id: i64) -> Result<()> {
        debug!(organization_id = organization_id, "Deleting organization");
        if !self.organization_repository.delete(organization_id).await? {
            return Err(CampusEventsError::OrganizationNotFound { organization_id });
        }
        info!(organization_id = organization_id, "Organization deleted");
        Ok(())
    }

    /// Link an organization to an event as a sponsor.
    ///
    /// Both sides are checked up front for precise not-found errors; the
    /// one-sponsorship-per-pair rule stays with the store and comes back as
    /// a conflict.
    pub async fn sponsor_event(&self, request: SponsorEventRequest) -> Result<EventSponsor> {
        let event_id = request.event_id;
        let organization_id = request.organization_id;
        debug!(
            event_id = event_id,
            organization_id = organization_id,
            "Adding sponsor"
        );
        validate_text_field("participant", &request.participant, 1, 120)?;

        self.event_repository
            .find_by_id(event_id)
            .await?
            .ok_or(CampusEventsError::EventNotFound { event_id })?;
        self.organization_repository
            .find_by_id(organization_id)
            .await?
            .ok_or(CampusEventsError::OrganizationNotFound { organization_id })?;

        let sponsor = self.organization_repository.add_sponsor(request).await?;
        info!(
            event_id = event_id,
            organization_id = organization_id,
            "Sponsor added"
        );
        Ok(sponsor)
    }

    /// Remove an organization's sponsorship of an event. Returns whether a
    /// sponsorship existed.
    pub async fn remove_sponsor(&self, event_id: i64, organization_id: i64) -> Result<bool> {
        debug!(
            event_id = event_id,
            organization_id = organization_id,
            "Removing sponsor"
        );
        let removed = self
            .organization_repository
            .remove_sponsor(event_id, organization_id)
            .await?;
        if removed {
            info!(
                event_id = event_id,
                organization_id = organization_id,
                "Sponsor removed"
            );
        }
        Ok(removed)
    }

    /// List the sponsors of an event
    pub async fn list_event_sponsors(&self, event_id: i64) -> Result<Vec<EventSponsor>> {
        debug!(event_id = event_id, "Listing sponsors");

        self.event_repository
            .find_by_id(event_id)
            .await?
            .ok_or(CampusEventsError::EventNotFound { event_id })?;

        self.organization_repository
            .get_event_sponsors(event_id)
            .await
    }
}
