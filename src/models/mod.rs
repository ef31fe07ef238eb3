//! Data models module
//!
//! Entities, request DTOs, and the field rules of the event lifecycle. The
//! wire contract serializes camelCase and accepts snake_case aliases on the
//! way in.

pub mod evaluation;
pub mod event;
pub mod facility;
pub mod notification;
pub mod organization;
pub mod patch;
pub mod user;

// Re-export commonly used models
pub use evaluation::{Evaluation, EvaluationOutcome, RecordDecisionRequest};
pub use event::{
    CreateEventRequest, EndorsementKind, Event, EventCategory, EventFilter, EventParticipant,
    EventState, RegisterParticipantRequest, UpdateEventRequest,
};
pub use facility::{CreateFacilityRequest, Facility, FacilityKind, UpdateFacilityRequest};
pub use notification::{CreateNotificationRequest, Notification, NotificationKind};
pub use organization::{
    CreateOrganizationRequest, EventSponsor, Organization, SponsorEventRequest,
    UpdateOrganizationRequest,
};
pub use patch::PatchField;
pub use user::{CreateUserRequest, UpdateUserRequest, User, UserRole};
