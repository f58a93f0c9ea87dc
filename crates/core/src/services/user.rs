//! User service.
//!
//! Only what feed records need from an account: creation, lookup and
//! deletion.

use chrono::Utc;
use pkucat_common::{AppError, AppResult};
use pkucat_db::{entities::user, repositories::UserRepository};
use sea_orm::Set;
use serde::Deserialize;
use validator::Validate;

/// Input for creating a user.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserInput {
    #[validate(length(min = 1, max = 150))]
    pub username: String,
}

/// User service for business logic.
#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
}

impl UserService {
    /// Create a new user service.
    #[must_use]
    pub const fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    /// Create a user.
    pub async fn create(&self, input: CreateUserInput) -> AppResult<user::Model> {
        input.validate()?;

        if self
            .user_repo
            .find_by_username(&input.username)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "Username already taken: {}",
                input.username
            )));
        }

        let model = user::ActiveModel {
            username: Set(input.username),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let created = self.user_repo.create(model).await?;
        tracing::info!(user_id = created.id, username = %created.username, "Created user");

        Ok(created)
    }

    /// Get a user by ID.
    pub async fn get(&self, user_id: i32) -> AppResult<user::Model> {
        self.user_repo.get_by_id(user_id).await
    }

    /// Delete a user together with everything they published, commented or liked.
    pub async fn delete(&self, user_id: i32) -> AppResult<()> {
        self.user_repo.get_by_id(user_id).await?;
        self.user_repo.delete(user_id).await?;
        tracing::info!(user_id, "Deleted user");
        Ok(())
    }
}
