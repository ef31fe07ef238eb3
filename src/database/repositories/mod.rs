//! Database repositories module
//!
//! One repository per aggregate; join-row operations live on the owning
//! aggregate's repository (participants on events, sponsors on
//! organizations, notifications on evaluations). All queries are
//! runtime-checked, never the compile-time macros.

pub mod evaluation;
pub mod event;
pub mod facility;
pub mod organization;
pub mod user;

// Re-export repositories
pub use evaluation::EvaluationRepository;
pub use event::EventRepository;
pub use facility::FacilityRepository;
pub use organization::OrganizationRepository;
pub use user::UserRepository;
