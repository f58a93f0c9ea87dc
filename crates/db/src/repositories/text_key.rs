//! Text keyword repository.

use std::sync::Arc;

use super::map_db_err;
use crate::entities::{TextKey, text_key};
use pkucat_common::AppResult;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

/// Keyword repository for database operations.
#[derive(Clone)]
pub struct TextKeyRepository {
    db: Arc<DatabaseConnection>,
}

impl TextKeyRepository {
    /// Create a new keyword repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Get the keywords of a post in extraction order.
    pub async fn find_by_post(&self, post_id: i32) -> AppResult<Vec<text_key::Model>> {
        TextKey::find()
            .filter(text_key::Column::PostId.eq(post_id))
            .order_by_asc(text_key::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }
}
