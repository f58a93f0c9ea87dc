//! Favor (like) service.

use pkucat_common::{AppError, AppResult, FeedConfig};
use pkucat_db::{
    entities::favor,
    repositories::{FavorRepository, PostRepository, UserRepository},
};
use sea_orm::Set;

/// Favor service for managing likes.
#[derive(Clone)]
pub struct FavorService {
    favor_repo: FavorRepository,
    post_repo: PostRepository,
    user_repo: UserRepository,
    feed: FeedConfig,
}

impl FavorService {
    /// Create a new favor service.
    #[must_use]
    pub fn new(
        favor_repo: FavorRepository,
        post_repo: PostRepository,
        user_repo: UserRepository,
    ) -> Self {
        Self {
            favor_repo,
            post_repo,
            user_repo,
            feed: FeedConfig::default(),
        }
    }

    /// Use the given feed limits.
    #[must_use]
    pub fn with_feed_config(mut self, feed: FeedConfig) -> Self {
        self.feed = feed;
        self
    }

    /// Like a post.
    ///
    /// The check below only gives a friendlier error; a concurrent duplicate
    /// is still stopped by the unique index and also surfaces as `Conflict`.
    pub async fn favor(&self, user_id: i32, post_id: i32) -> AppResult<favor::Model> {
        self.user_repo.get_by_id(user_id).await?;
        self.post_repo.get_by_id(post_id).await?;

        // Check if already liked
        if self.favor_repo.is_favored(post_id, user_id).await? {
            return Err(AppError::Conflict("Post already favored".to_string()));
        }

        let model = favor::ActiveModel {
            post_id: Set(post_id),
            user_id: Set(user_id),
            ..Default::default()
        };

        let created = self.favor_repo.create(model).await?;
        tracing::debug!(post_id, user_id, "Favored post");

        Ok(created)
    }

    /// Remove a like.
    pub async fn unfavor(&self, user_id: i32, post_id: i32) -> AppResult<()> {
        let removed = self
            .favor_repo
            .delete_by_post_and_user(post_id, user_id)
            .await?;

        if removed == 0 {
            return Err(AppError::NotFound("Favor not found".to_string()));
        }

        Ok(())
    }

    /// Check if a user has liked a post.
    pub async fn is_favored(&self, user_id: i32, post_id: i32) -> AppResult<bool> {
        self.favor_repo.is_favored(post_id, user_id).await
    }

    /// Count likes on a post.
    pub async fn count(&self, post_id: i32) -> AppResult<u64> {
        self.favor_repo.count_by_post(post_id).await
    }

    /// Get a user's likes (paginated, newest first).
    pub async fn list_by_user(
        &self,
        user_id: i32,
        limit: Option<u64>,
        until_id: Option<i32>,
    ) -> AppResult<Vec<favor::Model>> {
        self.favor_repo
            .find_by_user(user_id, self.feed.page_size(limit), until_id)
            .await
    }
}
