//! Favor (like) repository.

use std::sync::Arc;

use super::map_db_err;
use crate::entities::{Favor, favor};
use pkucat_common::AppResult;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Favor repository for database operations.
#[derive(Clone)]
pub struct FavorRepository {
    db: Arc<DatabaseConnection>,
}

impl FavorRepository {
    /// Create a new favor repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a favor by post and user.
    pub async fn find_by_post_and_user(
        &self,
        post_id: i32,
        user_id: i32,
    ) -> AppResult<Option<favor::Model>> {
        Favor::find()
            .filter(favor::Column::PostId.eq(post_id))
            .filter(favor::Column::UserId.eq(user_id))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Check if a user has liked a post.
    pub async fn is_favored(&self, post_id: i32, user_id: i32) -> AppResult<bool> {
        Ok(self.find_by_post_and_user(post_id, user_id).await?.is_some())
    }

    /// Create a new favor.
    ///
    /// A second like for the same pair fails with `AppError::Conflict`.
    pub async fn create(&self, model: favor::ActiveModel) -> AppResult<favor::Model> {
        model.insert(self.db.as_ref()).await.map_err(map_db_err)
    }

    /// Delete a favor by post and user, returning how many rows went away.
    pub async fn delete_by_post_and_user(&self, post_id: i32, user_id: i32) -> AppResult<u64> {
        let result = Favor::delete_many()
            .filter(favor::Column::PostId.eq(post_id))
            .filter(favor::Column::UserId.eq(user_id))
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected)
    }

    /// Count likes on a post.
    pub async fn count_by_post(&self, post_id: i32) -> AppResult<u64> {
        Favor::find()
            .filter(favor::Column::PostId.eq(post_id))
            .count(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }

    /// Get a user's likes (paginated, newest first).
    pub async fn find_by_user(
        &self,
        user_id: i32,
        limit: u64,
        until_id: Option<i32>,
    ) -> AppResult<Vec<favor::Model>> {
        let mut query = Favor::find()
            .filter(favor::Column::UserId.eq(user_id))
            .order_by_desc(favor::Column::Id)
            .limit(limit);

        if let Some(until) = until_id {
            query = query.filter(favor::Column::Id.lt(until));
        }

        query.all(self.db.as_ref()).await.map_err(map_db_err)
    }
}
