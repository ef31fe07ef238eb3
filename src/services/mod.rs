//! Services module
//!
//! This module contains business logic services

pub mod evaluation;
pub mod event;
pub mod facility;
pub mod organization;
pub mod user;

// Re-export commonly used services
pub use evaluation::EvaluationService;
pub use event::EventService;
pub use facility::FacilityService;
pub use organization::OrganizationService;
pub use user::UserService;

use crate::config::Settings;
use crate::database::DatabaseService;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub event_service: EventService,
    pub evaluation_service: EvaluationService,
    pub user_service: UserService,
    pub facility_service: FacilityService,
    pub organization_service: OrganizationService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(database: &DatabaseService, settings: Settings) -> Self {
        let event_service = EventService::new(
            database.events.clone(),
            database.users.clone(),
            settings.clone(),
        );
        let evaluation_service = EvaluationService::new(
            database.events.clone(),
            database.evaluations.clone(),
            database.users.clone(),
            settings.clone(),
        );
        let user_service = UserService::new(database.users.clone(), settings.clone());
        let facility_service = FacilityService::new(database.facilities.clone(), settings.clone());
        let organization_service = OrganizationService::new(
            database.organizations.clone(),
            database.events.clone(),
            settings,
        );

        Self {
            event_service,
            evaluation_service,
            user_service,
            facility_service,
            organization_service,
        }
    }
}
