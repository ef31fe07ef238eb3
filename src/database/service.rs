//! Database service layer
//!
//! This module provides a high-level interface to database operations

use crate::database::{
    DatabasePool, EvaluationRepository, EventRepository, FacilityRepository,
    OrganizationRepository, UserRepository,
};
use crate::models::event::EventState;
use crate::utils::errors::CampusEventsError;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub users: UserRepository,
    pub facilities: FacilityRepository,
    pub organizations: OrganizationRepository,
    pub events: EventRepository,
    pub evaluations: EvaluationRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            facilities: FacilityRepository::new(pool.clone()),
            organizations: OrganizationRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            evaluations: EvaluationRepository::new(pool),
        }
    }

    /// Get record counts across the schema, for health endpoints and
    /// operator tooling.
    pub async fn get_system_stats(&self) -> Result<serde_json::Value, CampusEventsError> {
        let user_count = self.users.count().await?;
        let facility_count = self.facilities.count().await?;
        let organization_count = self.organizations.count().await?;
        let event_count = self.events.count().await?;
        let under_review = self.events.count_in_state(EventState::UnderReview).await?;
        let evaluation_count = self.evaluations.count().await?;
        let notification_count = self.evaluations.count_notifications().await?;

        let stats = serde_json::json!({
            "users": {
                "total": user_count
            },
            "facilities": {
                "total": facility_count
            },
            "organizations": {
                "total": organization_count
            },
            "events": {
                "total": event_count,
                "under_review": under_review
            },
            "evaluations": {
                "total": evaluation_count,
                "notifications": notification_count
            }
        });

        Ok(stats)
    }
}
