//! Facility repository implementation

use sqlx::PgPool;

use crate::models::facility::{CreateFacilityRequest, Facility, UpdateFacilityRequest};
use crate::utils::errors::CampusEventsError;

#[derive(Debug, Clone)]
pub struct FacilityRepository {
    pool: PgPool,
}

impl FacilityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new facility
    pub async fn create(
        &self,
        request: CreateFacilityRequest,
    ) -> Result<Facility, CampusEventsError> {
        let facility = sqlx::query_as::<_, Facility>(
            r#"
            INSERT INTO facilities (name, kind, capacity, location)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, kind, capacity, location
            "#,
        )
        .bind(request.name)
        .bind(request.kind)
        .bind(request.capacity)
        .bind(request.location)
        .fetch_one(&self.pool)
        .await?;

        Ok(facility)
    }

    /// Find facility by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Facility>, CampusEventsError> {
        let facility = sqlx::query_as::<_, Facility>(
            "SELECT id, name, kind, capacity, location FROM facilities WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(facility)
    }

    /// Patch the provided facility columns; absent fields keep their stored
    /// value. Returns `None` when the row does not exist.
    pub async fn update(
        &self,
        id: i64,
        request: UpdateFacilityRequest,
    ) -> Result<Option<Facility>, CampusEventsError> {
        let facility = sqlx::query_as::<_, Facility>(
            r#"
            UPDATE facilities
            SET name = COALESCE($2, name),
                kind = COALESCE($3, kind),
                capacity = COALESCE($4, capacity),
                location = COALESCE($5, location)
            WHERE id = $1
            RETURNING id, name, kind, capacity, location
            "#,
        )
        .bind(id)
        .bind(request.name)
        .bind(request.kind)
        .bind(request.capacity)
        .bind(request.location)
        .fetch_optional(&self.pool)
        .await?;

        Ok(facility)
    }

    /// Delete a facility. Restricted while an event refers to the row; that
    /// surfaces as a conflict.
    pub async fn delete(&self, id: i64) -> Result<bool, CampusEventsError> {
        let result = sqlx::query("DELETE FROM facilities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List all facilities with pagination, newest first
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Facility>, CampusEventsError> {
        let facilities = sqlx::query_as::<_, Facility>(
            "SELECT id, name, kind, capacity, location FROM facilities ORDER BY id DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(facilities)
    }

    /// Count total facilities
    pub async fn count(&self) -> Result<i64, CampusEventsError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM facilities")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
