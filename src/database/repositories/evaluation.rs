//! Evaluation repository implementation
//!
//! Notification rows are owned by this repository: every notification
//! references the evaluation whose outcome it communicates.

use chrono::Utc;
use sqlx::PgPool;

use crate::models::evaluation::{Evaluation, RecordDecisionRequest};
use crate::models::notification::{CreateNotificationRequest, Notification};
use crate::utils::errors::CampusEventsError;

#[derive(Debug, Clone)]
pub struct EvaluationRepository {
    pool: PgPool,
}

impl EvaluationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record the decision for an event. `reviewed_at` is assigned here.
    ///
    /// The unique index on `event_id` turns a second decision for the same
    /// event into a conflict.
    pub async fn create(
        &self,
        event_id: i64,
        request: RecordDecisionRequest,
    ) -> Result<Evaluation, CampusEventsError> {
        let evaluation = sqlx::query_as::<_, Evaluation>(
            r#"
            INSERT INTO evaluations (event_id, outcome, comments, record_path, reviewed_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, event_id, outcome, comments, record_path, reviewed_at
            "#,
        )
        .bind(event_id)
        .bind(request.outcome)
        .bind(request.comments)
        .bind(request.record_path)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(evaluation)
    }

    /// Find the evaluation recorded for an event
    pub async fn find_by_event_id(
        &self,
        event_id: i64,
    ) -> Result<Option<Evaluation>, CampusEventsError> {
        let evaluation = sqlx::query_as::<_, Evaluation>(
            "SELECT id, event_id, outcome, comments, record_path, reviewed_at FROM evaluations WHERE event_id = $1"
        )
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(evaluation)
    }

    /// Record an outcome notification. `sent_at` is assigned here; no
    /// delivery happens anywhere in this crate.
    pub async fn create_notification(
        &self,
        request: CreateNotificationRequest,
    ) -> Result<Notification, CampusEventsError> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (evaluation_id, kind, recipient_id, justification, document_path, sent_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, evaluation_id, kind, recipient_id, justification, document_path, sent_at
            "#
        )
        .bind(request.evaluation_id)
        .bind(request.kind)
        .bind(request.recipient_id)
        .bind(request.justification)
        .bind(request.document_path)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(notification)
    }

    /// List the notifications addressed to a recipient, newest first
    pub async fn list_notifications_for_recipient(
        &self,
        recipient_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, CampusEventsError> {
        let notifications = sqlx::query_as::<_, Notification>(
            r#"
            SELECT id, evaluation_id, kind, recipient_id, justification, document_path, sent_at
            FROM notifications
            WHERE recipient_id = $1
            ORDER BY sent_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(recipient_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }

    /// Count total evaluations
    pub async fn count(&self) -> Result<i64, CampusEventsError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM evaluations")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    /// Count total notification records
    pub async fn count_notifications(&self) -> Result<i64, CampusEventsError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM notifications")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
