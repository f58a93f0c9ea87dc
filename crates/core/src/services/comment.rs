//! Comment service.

use chrono::Utc;
use pkucat_common::{AppError, AppResult, FeedConfig};
use pkucat_db::{
    entities::comment,
    repositories::{CommentRepository, PostRepository, UserRepository},
};
use sea_orm::Set;
use serde::Deserialize;
use validator::Validate;

/// Input for creating a comment.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentInput {
    #[validate(length(min = 1, max = 500))]
    pub text: String,
}

/// Comment service for business logic.
#[derive(Clone)]
pub struct CommentService {
    comment_repo: CommentRepository,
    post_repo: PostRepository,
    user_repo: UserRepository,
    feed: FeedConfig,
}

impl CommentService {
    /// Create a new comment service.
    #[must_use]
    pub fn new(
        comment_repo: CommentRepository,
        post_repo: PostRepository,
        user_repo: UserRepository,
    ) -> Self {
        Self {
            comment_repo,
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

    /// Comment on a post.
    pub async fn create(
        &self,
        user_id: i32,
        post_id: i32,
        input: CreateCommentInput,
    ) -> AppResult<comment::Model> {
        input.validate()?;

        if input.text.trim().is_empty() {
            return Err(AppError::Validation(
                "Comment text must not be blank".to_string(),
            ));
        }

        self.user_repo.get_by_id(user_id).await?;
        self.post_repo.get_by_id(post_id).await?;

        let model = comment::ActiveModel {
            post_id: Set(post_id),
            user_id: Set(user_id),
            time: Set(Utc::now().into()),
            text: Set(input.text),
            ..Default::default()
        };

        let created = self.comment_repo.create(model).await?;
        tracing::debug!(comment_id = created.id, post_id, user_id, "Created comment");

        Ok(created)
    }

    /// Delete a comment. Its author and the post's publisher may do so.
    pub async fn delete(&self, user_id: i32, comment_id: i32) -> AppResult<()> {
        let comment = self.comment_repo.get_by_id(comment_id).await?;

        if comment.user_id != user_id {
            let post = self.post_repo.get_by_id(comment.post_id).await?;
            if post.publisher_id != user_id {
                return Err(AppError::Forbidden(
                    "Only the author or the post's publisher can delete this comment".to_string(),
                ));
            }
        }

        self.comment_repo.delete(comment_id).await
    }

    /// List comments on a post, oldest first.
    pub async fn list(
        &self,
        post_id: i32,
        limit: Option<u64>,
        since_id: Option<i32>,
    ) -> AppResult<Vec<comment::Model>> {
        self.comment_repo
            .find_by_post(post_id, self.feed.page_size(limit), since_id)
            .await
    }

    /// Count comments on a post.
    pub async fn count(&self, post_id: i32) -> AppResult<u64> {
        self.comment_repo.count_by_post(post_id).await
    }
}
