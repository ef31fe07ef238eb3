//! Facility service implementation

use tracing::{debug, info};

use crate::config::Settings;
use crate::database::repositories::FacilityRepository;
use crate::models::facility::{CreateFacilityRequest, Facility, UpdateFacilityRequest};
use crate::utils::errors::{CampusEventsError, Result};
use crate::utils::helpers::{
    validate_optional_text_field, validate_page, validate_positive, validate_text_field,
};

/// Facility name length cap, in characters.
pub const NAME_MAX_LEN: usize = 80;
/// Location length cap, in characters.
pub const LOCATION_MAX_LEN: usize = 120;

/// Facility service for managing venue records
#[derive(Clone)]
pub struct FacilityService {
    facility_repository: FacilityRepository,
    settings: Settings,
}

impl FacilityService {
    /// Create a new FacilityService instance
    pub fn new(facility_repository: FacilityRepository, settings: Settings) -> Self {
        Self {
            facility_repository,
            settings,
        }
    }

    /// Validate and create a facility
    pub async fn create_facility(&self, request: CreateFacilityRequest) -> Result<Facility> {
        debug!(name = %request.name, "Creating facility");
        validate_text_field("name", &request.name, 1, NAME_MAX_LEN)?;
        validate_positive("capacity", request.capacity)?;
        validate_text_field("location", &request.location, 1, LOCATION_MAX_LEN)?;

        let facility = self.facility_repository.create(request).await?;
        info!(facility_id = facility.id, kind = %facility.kind, "Facility created");
        Ok(facility)
    }

    /// Get facility by ID
    pub async fn get_facility(&self, facility_id: i64) -> Result<Facility> {
        debug!(facility_id = facility_id, "Fetching facility");
        self.facility_repository
            .find_by_id(facility_id)
            .await?
            .ok_or(CampusEventsError::FacilityNotFound { facility_id })
    }

    /// List facilities with pagination, newest first
    pub async fn list_facilities(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Facility>> {
        let limit = limit.unwrap_or(self.settings.listing.default_page_size);
        let offset = offset.unwrap_or(0);
        validate_page(limit, offset, self.settings.listing.max_page_size)?;

        debug!(limit = limit, offset = offset, "Listing facilities");
        self.facility_repository.list(limit, offset).await
    }

    /// Patch the provided facility fields; absent fields keep their stored
    /// value.
    pub async fn update_facility(
        &self,
        facility_id: i64,
        request: UpdateFacilityRequest,
    ) -> Result<Facility> {
        debug!(facility_id = facility_id, "Updating facility");
        validate_optional_text_field("name", request.name.as_deref(), 1, NAME_MAX_LEN)?;
        if let Some(capacity) = request.capacity {
            validate_positive("capacity", capacity)?;
        }
        validate_optional_text_field("location", request.location.as_deref(), 1, LOCATION_MAX_LEN)?;

        let facility = self
            .facility_repository
            .update(facility_id, request)
            .await?
            .ok_or(CampusEventsError::FacilityNotFound { facility_id })?;

        info!(facility_id = facility.id, "Facility updated");
        Ok(facility)
    }

    /// Delete a facility. Fails with a conflict while an event still refers
    /// to it.
    pub async fn delete_facility(&self, facility_id: i64) -> Result<()> {
        debug!(facility_id = facility_id, "Deleting facility");
        if !self.facility_repository.delete(facility_id).await? {
            return Err(CampusEventsError::FacilityNotFound { facility_id });
        }
        info!(facility_id = facility_id, "Facility deleted");
        Ok(())
    }
}
