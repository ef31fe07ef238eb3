//! Evaluation service implementation
//!
//! Records approval decisions: one evaluation per event, a state overwrite
//! moving the event into its terminal state, and a notification record
//! addressed to the organizer. The three writes run sequentially without a
//! wrapping transaction; a partial failure surfaces to the caller.

use tracing::debug;

use crate::config::Settings;
use crate::database::repositories::{EvaluationRepository, EventRepository, UserRepository};
use crate::models::evaluation::{Evaluation, RecordDecisionRequest};
use crate::models::notification::{CreateNotificationRequest, Notification};
use crate::utils::errors::{CampusEventsError, Result};
use crate::utils::helpers::validate_page;
use crate::utils::logging::log_decision_recorded;

/// Evaluation service for the approval flow
#[derive(Clone)]
pub struct EvaluationService {
    event_repository: EventRepository,
    evaluation_repository: EvaluationRepository,
    user_repository: UserRepository,
    settings: Settings,
}

impl EvaluationService {
    /// Create a new EvaluationService instance
    pub fn new(
        event_repository: EventRepository,
        evaluation_repository: EvaluationRepository,
        user_repository: UserRepository,
        settings: Settings,
    ) -> Self {
        Self {
            event_repository,
            evaluation_repository,
            user_repository,
            settings,
        }
    }

    /// Record the approval decision for an event.
    ///
    /// Inserts the evaluation (a second decision for the same event is a
    /// conflict), overwrites the event with the matching terminal state,
    /// and records an outcome notification for the organizer. Who may
    /// decide, and whether the event was actually under review, is not
    /// enforced here.
    pub async fn record_decision(
        &self,
        event_id: i64,
        request: RecordDecisionRequest,
    ) -> Result<Evaluation> {
        debug!(event_id = event_id, outcome = %request.outcome, "Recording decision");

        let mut event = self
            .event_repository
            .find_by_id(event_id)
            .await?
            .ok_or(CampusEventsError::EventNotFound { event_id })?;

        let outcome = request.outcome;
        let justification = request.comments.clone();

        let evaluation = self.evaluation_repository.create(event_id, request).await?;

        // Terminal state lands through the same whole-row overwrite path as
        // any other update.
        event.state = outcome.to_event_state();
        self.event_repository
            .replace(&event)
            .await?
            .ok_or(CampusEventsError::EventNotFound { event_id })?;

        let notification = self
            .evaluation_repository
            .create_notification(CreateNotificationRequest {
                evaluation_id: evaluation.id,
                kind: outcome.into(),
                recipient_id: event.organizer_id,
                justification,
                document_path: None,
            })
            .await?;

        log_decision_recorded(event_id, outcome.as_str(), notification.recipient_id);
        Ok(evaluation)
    }

    /// Get the evaluation recorded for an event
    pub async fn get_evaluation(&self, event_id: i64) -> Result<Evaluation> {
        debug!(event_id = event_id, "Fetching evaluation");
        self.evaluation_repository
            .find_by_event_id(event_id)
            .await?
            .ok_or(CampusEventsError::EvaluationNotFound { event_id })
    }

    /// List the outcome notifications addressed to a user, newest first
    pub async fn list_notifications(
        &self,
        recipient_id: i64,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Notification>> {
        let limit = limit.unwrap_or(self.settings.listing.default_page_size);
        let offset = offset.unwrap_or(0);
        validate_page(limit, offset, self.settings.listing.max_page_size)?;

        debug!(recipient_id = recipient_id, "Listing notifications");
        self.user_repository
            .find_by_id(recipient_id)
            .await?
            .ok_or(CampusEventsError::UserNotFound {
                user_id: recipient_id,
            })?;

        self.evaluation_repository
            .list_notifications_for_recipient(recipient_id, limit, offset)
            .await
    }
}
