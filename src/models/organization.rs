//! Organization and event sponsorship models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// External organization that can sponsor events. All fields are required;
/// deletion is restricted while a sponsorship refers to the organization.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: i64,
    pub name: String,
    pub legal_representative: String,
    pub main_activity: String,
    pub phone: String,
    pub location: String,
    pub economic_sector: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationRequest {
    pub name: String,
    #[serde(alias = "legal_representative")]
    pub legal_representative: String,
    #[serde(alias = "main_activity")]
    pub main_activity: String,
    pub phone: String,
    pub location: String,
    #[serde(alias = "economic_sector")]
    pub economic_sector: String,
}

/// All organization columns are non-nullable, so absent and null both mean
/// "leave unchanged" here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganizationRequest {
    pub name: Option<String>,
    #[serde(alias = "legal_representative")]
    pub legal_representative: Option<String>,
    #[serde(alias = "main_activity")]
    pub main_activity: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    #[serde(alias = "economic_sector")]
    pub economic_sector: Option<String>,
}

/// Event↔Organization association. One sponsorship per pair; rows are
/// cascade-deleted with their event, and the organization side is
/// delete-restricted while a row exists.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct EventSponsor {
    pub id: i64,
    pub event_id: i64,
    pub organization_id: i64,
    pub certificate_path: Option<String>,
    /// Contact person acting for the organization at this event.
    pub participant: String,
    pub is_legal_representative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorEventRequest {
    #[serde(alias = "event_id")]
    pub event_id: i64,
    #[serde(alias = "organization_id")]
    pub organization_id: i64,
    #[serde(alias = "certificate_path")]
    pub certificate_path: Option<String>,
    pub participant: String,
    #[serde(default = "default_is_legal_representative")]
    #[serde(alias = "is_legal_representative")]
    pub is_legal_representative: bool,
}

fn default_is_legal_representative() -> bool {
    true
}
