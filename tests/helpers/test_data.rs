//! Seed data builders for the integration suites
//!
//! Directory rows (users, facilities, organizations) are created through
//! the public services so the tests cover the same path the API layer
//! uses. Emails carry a process-wide sequence number because the schema
//! enforces their uniqueness.

use chrono::{Duration, Utc};
use fake::faker::company::en::{CompanyName, Industry};
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use std::sync::atomic::{AtomicI64, Ordering};
use CampusEvents::models::{
    CreateEventRequest, CreateFacilityRequest, CreateOrganizationRequest, CreateUserRequest,
    Event, EventCategory, Facility, FacilityKind, Organization, User, UserRole,
};
use CampusEvents::services::ServiceFactory;

static SEED_SEQ: AtomicI64 = AtomicI64::new(1);

/// Produce an email address no earlier seed has used.
pub fn unique_email() -> String {
    let n = SEED_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("user{}@campus.test", n)
}

/// Create a user with the given role.
pub async fn seed_user(services: &ServiceFactory, role: UserRole) -> User {
    let request = CreateUserRequest {
        name: Name().fake(),
        email: unique_email(),
        role,
    };

    services
        .user_service
        .create_user(request)
        .await
        .expect("Failed to seed user")
}

/// Create an auditorium-sized facility.
pub async fn seed_facility(services: &ServiceFactory) -> Facility {
    let request = CreateFacilityRequest {
        name: format!("Auditorium {}", SEED_SEQ.fetch_add(1, Ordering::Relaxed)),
        kind: FacilityKind::Auditorium,
        capacity: 120,
        location: "North campus, building B".to_string(),
    };

    services
        .facility_service
        .create_facility(request)
        .await
        .expect("Failed to seed facility")
}

/// Create a sponsoring organization.
pub async fn seed_organization(services: &ServiceFactory) -> Organization {
    let request = CreateOrganizationRequest {
        name: CompanyName().fake(),
        legal_representative: Name().fake(),
        main_activity: Industry().fake(),
        phone: PhoneNumber().fake(),
        location: "Downtown office park".to_string(),
        economic_sector: Industry().fake(),
    };

    services
        .organization_service
        .create_organization(request)
        .await
        .expect("Failed to seed organization")
}

/// Baseline creation request for an academic event a week out. Tests
/// tweak fields before submitting.
pub fn event_request(organizer_id: i64, facility_id: i64) -> CreateEventRequest {
    let starts_at = Utc::now() + Duration::days(7);

    CreateEventRequest {
        title: "Software Engineering Colloquium".to_string(),
        description: Some("Invited talks from industry alumni".to_string()),
        category: EventCategory::Academic,
        organizer_id,
        facility_id,
        starts_at,
        ends_at: starts_at + Duration::hours(3),
        endorsement_path: "/docs/endorsements/colloquium.pdf".to_string(),
        state: None,
    }
}

/// Create an event with the baseline request.
pub async fn seed_event(services: &ServiceFactory, organizer_id: i64, facility_id: i64) -> Event {
    services
        .event_service
        .create_event(event_request(organizer_id, facility_id))
        .await
        .expect("Failed to seed event")
}
