//! Notification model
//!
//! Notifications are records only; delivery is someone else's job. Each row
//! communicates one evaluation outcome to one recipient.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::evaluation::EvaluationOutcome;

/// What the notification communicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "camelCase")]
#[sqlx(type_name = "text", rename_all = "camelCase")]
pub enum NotificationKind {
    Approved,
    Rejected,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Approved => "approved",
            NotificationKind::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EvaluationOutcome> for NotificationKind {
    fn from(outcome: EvaluationOutcome) -> Self {
        match outcome {
            EvaluationOutcome::Approved => NotificationKind::Approved,
            EvaluationOutcome::Rejected => NotificationKind::Rejected,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub evaluation_id: i64,
    pub kind: NotificationKind,
    pub recipient_id: i64,
    pub justification: Option<String>,
    pub document_path: Option<String>,
    pub sent_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    #[serde(alias = "evaluation_id")]
    pub evaluation_id: i64,
    pub kind: NotificationKind,
    #[serde(alias = "recipient_id")]
    pub recipient_id: i64,
    pub justification: Option<String>,
    #[serde(alias = "document_path")]
    pub document_path: Option<String>,
}
