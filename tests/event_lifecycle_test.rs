//! Event lifecycle integration tests
//!
//! Creation validation, merge-based partial updates, filtered listing,
//! deletion and participant management, exercised against a real
//! PostgreSQL schema.

mod helpers;

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use helpers::*;
use serde_json::json;
use serial_test::serial;
use CampusEvents::models::{
    EndorsementKind, EventCategory, EventFilter, EventState, RegisterParticipantRequest,
    UpdateEventRequest, UserRole,
};
use CampusEvents::{CampusEventsError, Settings};

#[tokio::test]
#[serial]
async fn create_event_defaults_to_registered() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    db.cleanup().await.expect("Failed to clean database");
    let services = db.services();

    let organizer = seed_user(&services, UserRole::Teacher).await;
    let facility = seed_facility(&services).await;

    let created = seed_event(&services, organizer.id, facility.id).await;
    assert_eq!(created.state, EventState::Registered);
    assert!(created.registered_at.is_some());

    let fetched = services
        .event_service
        .get_event(created.id)
        .await
        .expect("Failed to fetch event");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, created.title);
    assert_eq!(fetched.description, created.description);
    assert_eq!(fetched.organizer_id, organizer.id);
    assert_eq!(fetched.facility_id, facility.id);
}

#[tokio::test]
#[serial]
async fn create_event_honors_explicit_state() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    db.cleanup().await.expect("Failed to clean database");
    let services = db.services();

    let organizer = seed_user(&services, UserRole::AcademicSecretary).await;
    let facility = seed_facility(&services).await;

    let mut request = event_request(organizer.id, facility.id);
    request.state = Some(EventState::UnderReview);

    let created = services
        .event_service
        .create_event(request)
        .await
        .expect("Failed to create event");
    assert_eq!(created.state, EventState::UnderReview);
}

#[tokio::test]
#[serial]
async fn create_event_rejects_out_of_bounds_fields() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    let services = db.services();

    // Field checks run before any row is touched, so dangling ids are fine.
    let mut request = event_request(1, 1);
    request.title = "Ab".to_string();
    let err = services
        .event_service
        .create_event(request)
        .await
        .unwrap_err();
    assert_matches!(err, CampusEventsError::Validation { field, .. } if field == "title");

    let mut request = event_request(1, 1);
    request.title = "x".repeat(181);
    let err = services
        .event_service
        .create_event(request)
        .await
        .unwrap_err();
    assert_matches!(err, CampusEventsError::Validation { field, .. } if field == "title");

    let mut request = event_request(1, 1);
    request.ends_at = request.starts_at - Duration::hours(1);
    let err = services
        .event_service
        .create_event(request)
        .await
        .unwrap_err();
    assert_matches!(err, CampusEventsError::Validation { field, .. } if field == "endsAt");

    let mut request = event_request(1, 1);
    request.endorsement_path = String::new();
    let err = services
        .event_service
        .create_event(request)
        .await
        .unwrap_err();
    assert_matches!(err, CampusEventsError::Validation { field, .. } if field == "endorsementPath");
}

#[tokio::test]
#[serial]
async fn create_event_with_dangling_organizer_is_conflict() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    db.cleanup().await.expect("Failed to clean database");
    let services = db.services();

    let facility = seed_facility(&services).await;
    let request = event_request(424_242, facility.id);

    let err = services
        .event_service
        .create_event(request)
        .await
        .unwrap_err();
    assert_matches!(err, CampusEventsError::Conflict(_));
}

#[tokio::test]
#[serial]
async fn update_merges_only_supplied_fields() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    db.cleanup().await.expect("Failed to clean database");
    let services = db.services();

    let organizer = seed_user(&services, UserRole::Teacher).await;
    let facility = seed_facility(&services).await;
    let created = seed_event(&services, organizer.id, facility.id).await;

    let patch: UpdateEventRequest = serde_json::from_value(json!({
        "title": "Alumni Colloquium"
    }))
    .expect("Failed to parse patch");

    let updated = services
        .event_service
        .update_event(created.id, patch)
        .await
        .expect("Failed to update event");

    assert_eq!(updated.title, "Alumni Colloquium");
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.category, created.category);
    assert_eq!(updated.state, created.state);
    assert_eq!(updated.starts_at, created.starts_at);
    assert_eq!(updated.ends_at, created.ends_at);
    assert_eq!(updated.organizer_id, created.organizer_id);
    assert_eq!(updated.registered_at, created.registered_at);
}

#[tokio::test]
#[serial]
async fn update_with_null_clears_description() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    db.cleanup().await.expect("Failed to clean database");
    let services = db.services();

    let organizer = seed_user(&services, UserRole::Teacher).await;
    let facility = seed_facility(&services).await;
    let created = seed_event(&services, organizer.id, facility.id).await;
    assert!(created.description.is_some());

    let patch: UpdateEventRequest =
        serde_json::from_value(json!({ "description": null })).expect("Failed to parse patch");

    let updated = services
        .event_service
        .update_event(created.id, patch)
        .await
        .expect("Failed to update event");
    assert_eq!(updated.description, None);

    // Null is only an eraser for optional fields.
    let patch: UpdateEventRequest =
        serde_json::from_value(json!({ "title": null })).expect("Failed to parse patch");
    let err = services
        .event_service
        .update_event(created.id, patch)
        .await
        .unwrap_err();
    assert_matches!(err, CampusEventsError::Validation { field, .. } if field == "title");
}

#[tokio::test]
#[serial]
async fn update_validates_dates_against_merged_values() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    db.cleanup().await.expect("Failed to clean database");
    let services = db.services();

    let organizer = seed_user(&services, UserRole::Teacher).await;
    let facility = seed_facility(&services).await;
    let created = seed_event(&services, organizer.id, facility.id).await;

    // A new end bound is checked against the stored start bound.
    let bad_end = (created.starts_at - Duration::hours(1)).to_rfc3339();
    let patch: UpdateEventRequest =
        serde_json::from_value(json!({ "endsAt": bad_end })).expect("Failed to parse patch");
    let err = services
        .event_service
        .update_event(created.id, patch)
        .await
        .unwrap_err();
    assert_matches!(err, CampusEventsError::Validation { field, .. } if field == "endsAt");

    // Moving both bounds together is allowed even past the old window.
    let new_start = created.ends_at + Duration::days(1);
    let new_end = new_start + Duration::hours(2);
    let patch: UpdateEventRequest = serde_json::from_value(json!({
        "startsAt": new_start.to_rfc3339(),
        "endsAt": new_end.to_rfc3339()
    }))
    .expect("Failed to parse patch");
    let updated = services
        .event_service
        .update_event(created.id, patch)
        .await
        .expect("Failed to update event");
    assert_eq!(updated.starts_at, new_start);
    assert_eq!(updated.ends_at, new_end);
}

#[tokio::test]
#[serial]
async fn unknown_patch_keys_are_ignored_unless_strict() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    db.cleanup().await.expect("Failed to clean database");
    let services = db.services();

    let organizer = seed_user(&services, UserRole::Teacher).await;
    let facility = seed_facility(&services).await;
    let created = seed_event(&services, organizer.id, facility.id).await;

    let patch: UpdateEventRequest = serde_json::from_value(json!({
        "venue": "Telematics lab",
        "title": "Renamed Colloquium"
    }))
    .expect("Failed to parse patch");

    let updated = services
        .event_service
        .update_event(created.id, patch)
        .await
        .expect("Failed to update event");
    assert_eq!(updated.title, "Renamed Colloquium");

    let mut settings = Settings::default();
    settings.features.strict_patches = true;
    let strict = db.services_with_settings(settings);

    let patch: UpdateEventRequest = serde_json::from_value(json!({
        "venue": "Telematics lab"
    }))
    .expect("Failed to parse patch");
    let err = strict
        .event_service
        .update_event(created.id, patch)
        .await
        .unwrap_err();
    assert_matches!(err, CampusEventsError::Validation { field, .. } if field == "patch");
}

#[tokio::test]
#[serial]
async fn missing_event_reports_its_id() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    db.cleanup().await.expect("Failed to clean database");
    let services = db.services();

    let err = services.event_service.get_event(4242).await.unwrap_err();
    assert_matches!(err, CampusEventsError::EventNotFound { event_id: 4242 });

    let err = services
        .event_service
        .update_event(4242, UpdateEventRequest::default())
        .await
        .unwrap_err();
    assert_matches!(err, CampusEventsError::EventNotFound { event_id: 4242 });

    let err = services.event_service.delete_event(4242).await.unwrap_err();
    assert_matches!(err, CampusEventsError::EventNotFound { event_id: 4242 });
}

#[tokio::test]
#[serial]
async fn delete_removes_event() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    db.cleanup().await.expect("Failed to clean database");
    let services = db.services();

    let organizer = seed_user(&services, UserRole::Teacher).await;
    let facility = seed_facility(&services).await;
    let created = seed_event(&services, organizer.id, facility.id).await;

    services
        .event_service
        .delete_event(created.id)
        .await
        .expect("Failed to delete event");

    let err = services
        .event_service
        .get_event(created.id)
        .await
        .unwrap_err();
    assert_matches!(err, CampusEventsError::EventNotFound { .. });

    let count = db.count_records("events").await.expect("Failed to count");
    assert_eq!(count, 0);
}

#[tokio::test]
#[serial]
async fn listing_orders_newest_first_and_filters() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    db.cleanup().await.expect("Failed to clean database");
    let services = db.services();

    let organizer = seed_user(&services, UserRole::Teacher).await;
    let facility = seed_facility(&services).await;
    let base = Utc::now() + Duration::days(30);

    let mut ids = Vec::new();
    for day in 0..3 {
        let mut request = event_request(organizer.id, facility.id);
        request.title = format!("Orientation day {}", day + 1);
        request.starts_at = base + Duration::days(day);
        request.ends_at = request.starts_at + Duration::hours(2);
        let event = services
            .event_service
            .create_event(request)
            .await
            .expect("Failed to create event");
        ids.push(event.id);
    }

    let mut request = event_request(organizer.id, facility.id);
    request.title = "Salsa night".to_string();
    request.category = EventCategory::Recreational;
    request.state = Some(EventState::UnderReview);
    request.starts_at = base - Duration::days(1);
    request.ends_at = request.starts_at + Duration::hours(4);
    let recreational = services
        .event_service
        .create_event(request)
        .await
        .expect("Failed to create event");

    // Later start dates come first.
    let all = services
        .event_service
        .list_events(EventFilter::default(), None, None)
        .await
        .expect("Failed to list events");
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].id, ids[2]);
    assert_eq!(all[1].id, ids[1]);
    assert_eq!(all[2].id, ids[0]);
    assert_eq!(all[3].id, recreational.id);

    let filter = EventFilter {
        category: Some(EventCategory::Recreational),
        ..Default::default()
    };
    let recreational_only = services
        .event_service
        .list_events(filter, None, None)
        .await
        .expect("Failed to list events");
    assert_eq!(recreational_only.len(), 1);
    assert_eq!(recreational_only[0].id, recreational.id);

    let filter = EventFilter {
        state: Some(EventState::UnderReview),
        ..Default::default()
    };
    let under_review = services
        .event_service
        .list_events(filter, None, None)
        .await
        .expect("Failed to list events");
    assert_eq!(under_review.len(), 1);

    let filter = EventFilter {
        search: Some("orientation".to_string()),
        ..Default::default()
    };
    let matched = services
        .event_service
        .list_events(filter, None, None)
        .await
        .expect("Failed to list events");
    assert_eq!(matched.len(), 3);

    let filter = EventFilter {
        starts_after: Some(base + Duration::hours(12)),
        ..Default::default()
    };
    let window = services
        .event_service
        .list_events(filter, None, None)
        .await
        .expect("Failed to list events");
    assert_eq!(window.len(), 2);

    // Pagination walks the same ordering.
    let page = services
        .event_service
        .list_events(EventFilter::default(), Some(2), Some(1))
        .await
        .expect("Failed to list events");
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, ids[1]);
    assert_eq!(page[1].id, ids[0]);
}

#[tokio::test]
#[serial]
async fn listing_rejects_out_of_range_pages() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    db.cleanup().await.expect("Failed to clean database");
    let services = db.services();

    let err = services
        .event_service
        .list_events(EventFilter::default(), Some(0), None)
        .await
        .unwrap_err();
    assert_matches!(err, CampusEventsError::Validation { field, .. } if field == "limit");

    // Default settings cap pages at 200.
    let err = services
        .event_service
        .list_events(EventFilter::default(), Some(201), None)
        .await
        .unwrap_err();
    assert_matches!(err, CampusEventsError::Validation { field, .. } if field == "limit");

    let err = services
        .event_service
        .list_events(EventFilter::default(), None, Some(-1))
        .await
        .unwrap_err();
    assert_matches!(err, CampusEventsError::Validation { field, .. } if field == "offset");
}

#[tokio::test]
#[serial]
async fn participants_allow_one_principal_per_event() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    db.cleanup().await.expect("Failed to clean database");
    let services = db.services();

    let organizer = seed_user(&services, UserRole::Teacher).await;
    let student = seed_user(&services, UserRole::Student).await;
    let facility = seed_facility(&services).await;
    let event = seed_event(&services, organizer.id, facility.id).await;

    let principal = services
        .event_service
        .register_participant(RegisterParticipantRequest {
            event_id: event.id,
            user_id: organizer.id,
            is_principal: true,
            endorsement_kind: Some(EndorsementKind::ProgramDirector),
            endorsement_path: Some("/docs/endorsements/director.pdf".to_string()),
        })
        .await
        .expect("Failed to register principal");
    assert!(principal.is_principal);

    services
        .event_service
        .register_participant(RegisterParticipantRequest {
            event_id: event.id,
            user_id: student.id,
            is_principal: false,
            endorsement_kind: None,
            endorsement_path: None,
        })
        .await
        .expect("Failed to register participant");

    let err = services
        .event_service
        .register_participant(RegisterParticipantRequest {
            event_id: event.id,
            user_id: student.id,
            is_principal: true,
            endorsement_kind: Some(EndorsementKind::TeachingDirector),
            endorsement_path: None,
        })
        .await
        .unwrap_err();
    assert_matches!(err, CampusEventsError::Conflict(_));

    let participants = services
        .event_service
        .list_participants(event.id)
        .await
        .expect("Failed to list participants");
    assert_eq!(participants.len(), 2);
    assert!(participants[0].is_principal);
    assert_eq!(participants[0].user_id, organizer.id);

    let removed = services
        .event_service
        .remove_participant(event.id, student.id)
        .await
        .expect("Failed to remove participant");
    assert!(removed);

    let removed_again = services
        .event_service
        .remove_participant(event.id, student.id)
        .await
        .expect("Failed to remove participant");
    assert!(!removed_again);
}

#[tokio::test]
#[serial]
async fn participant_registration_checks_both_sides() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    db.cleanup().await.expect("Failed to clean database");
    let services = db.services();

    let organizer = seed_user(&services, UserRole::Teacher).await;
    let facility = seed_facility(&services).await;
    let event = seed_event(&services, organizer.id, facility.id).await;

    let err = services
        .event_service
        .register_participant(RegisterParticipantRequest {
            event_id: 4242,
            user_id: organizer.id,
            is_principal: false,
            endorsement_kind: None,
            endorsement_path: None,
        })
        .await
        .unwrap_err();
    assert_matches!(err, CampusEventsError::EventNotFound { event_id: 4242 });

    let err = services
        .event_service
        .register_participant(RegisterParticipantRequest {
            event_id: event.id,
            user_id: 4242,
            is_principal: false,
            endorsement_kind: None,
            endorsement_path: None,
        })
        .await
        .unwrap_err();
    assert_matches!(err, CampusEventsError::UserNotFound { user_id: 4242 });
}
