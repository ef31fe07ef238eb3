//! User service implementation
//!
//! CRUD for the people in the system: organizers, participants, and
//! notification recipients.

use tracing::{debug, info};

use crate::config::Settings;
use crate::database::repositories::UserRepository;
use crate::models::user::{CreateUserRequest, UpdateUserRequest, User};
use crate::utils::errors::{CampusEventsError, Result};
use crate::utils::helpers::{validate_optional_text_field, validate_page, validate_text_field};

/// User name length cap, in characters.
pub const NAME_MAX_LEN: usize = 100;
/// Email length cap, in characters. Uniqueness is the store's job.
pub const EMAIL_MAX_LEN: usize = 120;

/// User service for managing user records
#[derive(Clone)]
pub struct UserService {
    user_repository: UserRepository,
    settings: Settings,
}

impl UserService {
    /// Create a new UserService instance
    pub fn new(user_repository: UserRepository, settings: Settings) -> Self {
        Self {
            user_repository,
            settings,
        }
    }

    /// Validate and create a user. A duplicate email surfaces as a
    /// conflict from the store.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User> {
        debug!(email = %request.email, "Creating user");
        validate_text_field("name", &request.name, 1, NAME_MAX_LEN)?;
        validate_text_field("email", &request.email, 1, EMAIL_MAX_LEN)?;

        let user = self.user_repository.create(request).await?;
        info!(user_id = user.id, role = %user.role, "User created");
        Ok(user)
    }

    /// Get user by ID
    pub async fn get_user(&self, user_id: i64) -> Result<User> {
        debug!(user_id = user_id, "Fetching user");
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(CampusEventsError::UserNotFound { user_id })
    }

    /// Get user by email
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        debug!(email = %email, "Fetching user by email");
        self.user_repository.find_by_email(email).await
    }

    /// List users with pagination, newest first
    pub async fn list_users(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<User>> {
        let limit = limit.unwrap_or(self.settings.listing.default_page_size);
        let offset = offset.unwrap_or(0);
        validate_page(limit, offset, self.settings.listing.max_page_size)?;

        debug!(limit = limit, offset = offset, "Listing users");
        self.user_repository.list(limit, offset).await
    }

    /// Patch the provided user fields; absent fields keep their stored
    /// value.
    pub async fn update_user(&self, user_id: i64, request: UpdateUserRequest) -> Result<User> {
        debug!(user_id = user_id, "Updating user");
        validate_optional_text_field("name", request.name.as_deref(), 1, NAME_MAX_LEN)?;
        validate_optional_text_field("email", request.email.as_deref(), 1, EMAIL_MAX_LEN)?;

        let user = self
            .user_repository
            .update(user_id, request)
            .await?
            .ok_or(CampusEventsError::UserNotFound { user_id })?;

        info!(user_id = user.id, "User updated");
        Ok(user)
    }

    /// Delete a user. Fails with a conflict while an organized event, a
    /// participation, or a notification still refers to them.
    pub async fn delete_user(&self, user_id: i64) -> Result<()> {
        debug!(user_id = user_id, "Deleting user");
        if !self.user_repository.delete(user_id).await? {
            return Err(CampusEventsError::UserNotFound { user_id });
        }
        info!(user_id = user_id, "User deleted");
        Ok(())
    }
}
