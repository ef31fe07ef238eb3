//! Facility model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Kind of bookable campus space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "camelCase")]
#[sqlx(type_name = "text", rename_all = "camelCase")]
pub enum FacilityKind {
    Room,
    Auditorium,
    Lab,
    Field,
    Other,
}

impl FacilityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacilityKind::Room => "room",
            FacilityKind::Auditorium => "auditorium",
            FacilityKind::Lab => "lab",
            FacilityKind::Field => "field",
            FacilityKind::Other => "other",
        }
    }
}

impl std::fmt::Display for FacilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Venue an event is held at. Deletion is restricted while an event refers
/// to the facility.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: i64,
    pub name: String,
    pub kind: FacilityKind,
    pub capacity: i32,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFacilityRequest {
    pub name: String,
    pub kind: FacilityKind,
    pub capacity: i32,
    pub location: String,
}

/// All facility columns are non-nullable, so absent and null both mean
/// "leave unchanged" here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFacilityRequest {
    pub name: Option<String>,
    pub kind: Option<FacilityKind>,
    pub capacity: Option<i32>,
    pub location: Option<String>,
}
