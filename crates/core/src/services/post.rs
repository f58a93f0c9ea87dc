//! Post service.

use chrono::Utc;
use pkucat_common::{AppError, AppResult, FeedConfig};
use pkucat_db::{
    entities::{
        photo,
        post::{self, MediaKind},
        text_key,
    },
    repositories::{
        CommentRepository, FavorRepository, NewPost, PhotoRepository, PostRepository,
        TextKeyRepository, UserRepository,
    },
};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::keyword::extract_keywords;

/// Media attached to a new post.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MediaInput {
    /// Text only.
    #[default]
    None,
    /// A single video.
    Video {
        /// Storage location of the video.
        location: String,
    },
    /// One or more photos, in display order.
    Images {
        /// Storage locations of the photos.
        locations: Vec<String>,
    },
}

impl MediaInput {
    /// The media kind stored on the post row.
    #[must_use]
    pub const fn kind(&self) -> MediaKind {
        match self {
            Self::None => MediaKind::None,
            Self::Video { .. } => MediaKind::Video,
            Self::Images { .. } => MediaKind::Image,
        }
    }
}

/// Input for creating a new post.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostInput {
    #[validate(length(max = 2000))]
    pub text: Option<String>,

    #[serde(default)]
    pub media: MediaInput,
}

/// A post with everything attached to it.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    pub post: post::Model,
    pub photos: Vec<photo::Model>,
    pub keywords: Vec<text_key::Model>,
    pub comments_count: u64,
    pub favors_count: u64,
}

/// Post service for business logic.
#[derive(Clone)]
pub struct PostService {
    post_repo: PostRepository,
    user_repo: UserRepository,
    photo_repo: PhotoRepository,
    text_key_repo: TextKeyRepository,
    comment_repo: CommentRepository,
    favor_repo: FavorRepository,
    feed: FeedConfig,
}

impl PostService {
    /// Create a new post service with default feed limits.
    #[must_use]
    pub fn new(
        post_repo: PostRepository,
        user_repo: UserRepository,
        photo_repo: PhotoRepository,
        text_key_repo: TextKeyRepository,
        comment_repo: CommentRepository,
        favor_repo: FavorRepository,
    ) -> Self {
        Self {
            post_repo,
            user_repo,
            photo_repo,
            text_key_repo,
            comment_repo,
            favor_repo,
            feed: FeedConfig::default(),
        }
    }

    /// Use the given feed limits.
    #[must_use]
    pub fn with_feed_config(mut self, feed: FeedConfig) -> Self {
        self.feed = feed;
        self
    }

    /// Create a new post.
    pub async fn create(&self, publisher_id: i32, input: CreatePostInput) -> AppResult<post::Model> {
        input.validate()?;

        let text = input.text.filter(|t| !t.trim().is_empty());
        let kind = input.media.kind();

        let (video, photos) = match input.media {
            MediaInput::None => (None, vec![]),
            MediaInput::Video { location } => {
                validate_location(&location, post::VIDEO_MAX_LEN, "Video location")?;
                (Some(location), vec![])
            }
            MediaInput::Images { locations } => {
                if locations.is_empty() {
                    return Err(AppError::Validation(
                        "An image post needs at least one photo".to_string(),
                    ));
                }
                if locations.len() > self.feed.max_photos_per_post {
                    return Err(AppError::Validation(format!(
                        "Maximum of {} photos allowed per post",
                        self.feed.max_photos_per_post
                    )));
                }
                for location in &locations {
                    validate_location(location, photo::PHOTO_MAX_LEN, "Photo location")?;
                }
                (None, locations)
            }
        };

        if text.is_none() && kind == MediaKind::None {
            return Err(AppError::Validation(
                "A post needs text or media".to_string(),
            ));
        }

        // Check publisher exists
        self.user_repo.get_by_id(publisher_id).await?;

        let keys = text
            .as_deref()
            .map(|t| extract_keywords(t, self.feed.max_keywords_per_post))
            .unwrap_or_default();

        let new = NewPost {
            post: post::ActiveModel {
                publisher_id: Set(publisher_id),
                time: Set(Utc::now().into()),
                text: Set(text),
                is_video: Set(kind.as_flag()),
                video: Set(video),
                ..Default::default()
            },
            photos,
            keys,
        };

        let created = self.post_repo.create_with_attachments(new).await?;
        tracing::info!(post_id = created.id, publisher_id, media = ?kind, "Created post");

        Ok(created)
    }

    /// Get a post by ID.
    pub async fn get(&self, post_id: i32) -> AppResult<post::Model> {
        self.post_repo.get_by_id(post_id).await
    }

    /// Get a post with its photos, keywords and counters.
    pub async fn get_detail(&self, post_id: i32) -> AppResult<PostDetail> {
        let post = self.post_repo.get_by_id(post_id).await?;

        let photos = if post.media_kind() == MediaKind::Image {
            self.photo_repo.find_by_post(post_id).await?
        } else {
            vec![]
        };
        let keywords = self.text_key_repo.find_by_post(post_id).await?;
        let comments_count = self.comment_repo.count_by_post(post_id).await?;
        let favors_count = self.favor_repo.count_by_post(post_id).await?;

        Ok(PostDetail {
            post,
            photos,
            keywords,
            comments_count,
            favors_count,
        })
    }

    /// Delete a post. Only its publisher may do so.
    pub async fn delete(&self, user_id: i32, post_id: i32) -> AppResult<()> {
        let post = self.post_repo.get_by_id(post_id).await?;

        if post.publisher_id != user_id {
            return Err(AppError::Forbidden(
                "Only the publisher can delete this post".to_string(),
            ));
        }

        self.post_repo.delete(post_id).await?;
        tracing::info!(post_id, user_id, "Deleted post");

        Ok(())
    }

    /// List a user's posts, newest first.
    pub async fn list_by_publisher(
        &self,
        publisher_id: i32,
        limit: Option<u64>,
        until_id: Option<i32>,
    ) -> AppResult<Vec<post::Model>> {
        self.post_repo
            .find_by_publisher(publisher_id, self.feed.page_size(limit), until_id)
            .await
    }

    /// List the most recent posts, newest first.
    pub async fn list_recent(
        &self,
        limit: Option<u64>,
        until_id: Option<i32>,
    ) -> AppResult<Vec<post::Model>> {
        self.post_repo
            .find_recent(self.feed.page_size(limit), until_id)
            .await
    }

    /// Find posts matching every keyword of `query`, newest first.
    pub async fn search_by_keyword(
        &self,
        query: &str,
        limit: Option<u64>,
        until_id: Option<i32>,
    ) -> AppResult<Vec<post::Model>> {
        let keys = extract_keywords(query, self.feed.max_keywords_per_post);
        if keys.is_empty() {
            return Ok(vec![]);
        }

        self.post_repo
            .find_by_keywords(&keys, self.feed.page_size(limit), until_id)
            .await
    }

    /// Count a user's posts.
    pub async fn count_by_publisher(&self, publisher_id: i32) -> AppResult<u64> {
        self.post_repo.count_by_publisher(publisher_id).await
    }
}

fn validate_location(location: &str, max_len: usize, what: &str) -> AppResult<()> {
    if location.trim().is_empty() {
        return Err(AppError::Validation(format!("{what} must not be empty")));
    }
    if location.chars().count() > max_len {
        return Err(AppError::Validation(format!(
            "{what} must be at most {max_len} characters"
        )));
    }
    Ok(())
}
