//! Evaluation model
//!
//! One approval decision per event; the unique index on `event_id` makes a
//! second decision a conflict rather than an overwrite.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::event::EventState;

/// Outcome of an approval evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "camelCase")]
#[sqlx(type_name = "text", rename_all = "camelCase")]
pub enum EvaluationOutcome {
    Approved,
    Rejected,
}

impl EvaluationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationOutcome::Approved => "approved",
            EvaluationOutcome::Rejected => "rejected",
        }
    }

    /// Terminal event state this outcome moves the event into.
    pub fn to_event_state(self) -> EventState {
        match self {
            EvaluationOutcome::Approved => EventState::Approved,
            EvaluationOutcome::Rejected => EventState::Rejected,
        }
    }
}

impl std::fmt::Display for EvaluationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub id: i64,
    pub event_id: i64,
    pub outcome: EvaluationOutcome,
    pub comments: Option<String>,
    /// Path reference to the signed decision record, never resolved here.
    pub record_path: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

/// Decision payload for the approval flow. The target event id travels out
/// of band (a path parameter, typically), so it is not part of the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDecisionRequest {
    pub outcome: EvaluationOutcome,
    pub comments: Option<String>,
    #[serde(alias = "record_path")]
    pub record_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn outcome_maps_to_terminal_state() {
        assert_eq!(
            EvaluationOutcome::Approved.to_event_state(),
            EventState::Approved
        );
        assert_eq!(
            EvaluationOutcome::Rejected.to_event_state(),
            EventState::Rejected
        );
        assert!(EvaluationOutcome::Approved.to_event_state().is_terminal());
    }

    #[test]
    fn outcome_wire_values_are_closed() {
        let outcome: EvaluationOutcome = serde_json::from_value(json!("rejected")).unwrap();
        assert_eq!(outcome, EvaluationOutcome::Rejected);
        assert!(serde_json::from_value::<EvaluationOutcome>(json!("pending")).is_err());
    }
}
