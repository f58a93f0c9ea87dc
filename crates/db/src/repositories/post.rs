//! Post repository.

use std::sync::Arc;

use super::map_db_err;
use crate::entities::{Photo, Post, TextKey, photo, post, text_key};
use pkucat_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait, sea_query::Query,
};
use tracing::debug;

/// A post together with the rows written alongside it.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// The post row itself.
    pub post: post::ActiveModel,
    /// Photo locations, in display order.
    pub photos: Vec<String>,
    /// Keywords extracted from the text.
    pub keys: Vec<String>,
}

/// Post repository for database operations.
#[derive(Clone)]
pub struct PostRepository {
    db: Arc<DatabaseConnection>,
}

impl PostRepository {
    /// Create a new post repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a post by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<post::Model>> {
        Post::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Find a post by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<post::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::PostNotFound(id.to_string()))
    }

    /// Create a post with its photos and keywords in one transaction.
    pub async fn create_with_attachments(&self, new: NewPost) -> AppResult<post::Model> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let created = new.post.insert(&txn).await.map_err(map_db_err)?;

        if !new.photos.is_empty() {
            let photos = new.photos.into_iter().map(|location| photo::ActiveModel {
                post_id: Set(created.id),
                photo: Set(location),
                ..Default::default()
            });
            Photo::insert_many(photos)
                .exec_without_returning(&txn)
                .await
                .map_err(map_db_err)?;
        }

        if !new.keys.is_empty() {
            let keys = new.keys.into_iter().map(|key| text_key::ActiveModel {
                post_id: Set(created.id),
                key: Set(key),
                ..Default::default()
            });
            TextKey::insert_many(keys)
                .exec_without_returning(&txn)
                .await
                .map_err(map_db_err)?;
        }

        txn.commit().await.map_err(map_db_err)?;

        debug!(post_id = created.id, publisher_id = created.publisher_id, "Post stored");
        Ok(created)
    }

    /// Delete a post. Comments, photos, favors and keywords go with it.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        Post::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(())
    }

    /// Get posts by publisher (paginated, newest first).
    pub async fn find_by_publisher(
        &self,
        publisher_id: i32,
        limit: u64,
        until_id: Option<i32>,
    ) -> AppResult<Vec<post::Model>> {
        let mut query = Post::find()
            .filter(post::Column::PublisherId.eq(publisher_id))
            .order_by_desc(post::Column::Id)
            .limit(limit);

        if let Some(until) = until_id {
            query = query.filter(post::Column::Id.lt(until));
        }

        query.all(self.db.as_ref()).await.map_err(map_db_err)
    }

    /// Get the most recent posts (paginated, newest first).
    pub async fn find_recent(
        &self,
        limit: u64,
        until_id: Option<i32>,
    ) -> AppResult<Vec<post::Model>> {
        let mut query = Post::find().order_by_desc(post::Column::Id).limit(limit);

        if let Some(until) = until_id {
            query = query.filter(post::Column::Id.lt(until));
        }

        query.all(self.db.as_ref()).await.map_err(map_db_err)
    }

    /// Get posts tagged with every one of `keys` (paginated, newest first).
    pub async fn find_by_keywords(
        &self,
        keys: &[String],
        limit: u64,
        until_id: Option<i32>,
    ) -> AppResult<Vec<post::Model>> {
        if keys.is_empty() {
            return Ok(vec![]);
        }

        let mut query = Post::find().order_by_desc(post::Column::Id).limit(limit);

        for key in keys {
            let tagged = Query::select()
                .column(text_key::Column::PostId)
                .from(TextKey)
                .and_where(text_key::Column::Key.eq(key.as_str()))
                .to_owned();
            query = query.filter(post::Column::Id.in_subquery(tagged));
        }

        if let Some(until) = until_id {
            query = query.filter(post::Column::Id.lt(until));
        }

        query.all(self.db.as_ref()).await.map_err(map_db_err)
    }

    /// Count posts by publisher.
    pub async fn count_by_publisher(&self, publisher_id: i32) -> AppResult<u64> {
        Post::find()
            .filter(post::Column::PublisherId.eq(publisher_id))
            .count(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }
}
