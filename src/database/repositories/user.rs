//! User repository implementation

use sqlx::PgPool;

use crate::models::user::{CreateUserRequest, UpdateUserRequest, User};
use crate::utils::errors::CampusEventsError;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user. The unique index on email turns a duplicate into
    /// a conflict.
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, CampusEventsError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, role)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, role
            "#,
        )
        .bind(request.name)
        .bind(request.email)
        .bind(request.role)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, CampusEventsError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, CampusEventsError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Patch the provided user columns; absent fields keep their stored
    /// value. Returns `None` when the row does not exist.
    pub async fn update(
        &self,
        id: i64,
        request: UpdateUserRequest,
    ) -> Result<Option<User>, CampusEventsError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                role = COALESCE($4, role)
            WHERE id = $1
            RETURNING id, name, email, role
            "#,
        )
        .bind(id)
        .bind(request.name)
        .bind(request.email)
        .bind(request.role)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Delete a user. Restricted while an organized event, a participation,
    /// or a notification still refers to the row; that surfaces as a
    /// conflict.
    pub async fn delete(&self, id: i64) -> Result<bool, CampusEventsError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List all users with pagination, newest first
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>, CampusEventsError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role FROM users ORDER BY id DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Count total users
    pub async fn count(&self) -> Result<i64, CampusEventsError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
