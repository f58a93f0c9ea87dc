//! Photo repository.

use std::sync::Arc;

use super::map_db_err;
use crate::entities::{Photo, photo};
use pkucat_common::AppResult;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

/// Photo repository for database operations.
///
/// Photos are written together with their post, see
/// [`PostRepository::create_with_attachments`](super::PostRepository::create_with_attachments).
#[derive(Clone)]
pub struct PhotoRepository {
    db: Arc<DatabaseConnection>,
}

impl PhotoRepository {
    /// Create a new photo repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Get the photos of a post in display order.
    pub async fn find_by_post(&self, post_id: i32) -> AppResult<Vec<photo::Model>> {
        Photo::find()
            .filter(photo::Column::PostId.eq(post_id))
            .order_by_asc(photo::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_find_by_post() {
        let photos = vec![
            photo::Model {
                id: 1,
                post_id: 4,
                photo: "media/a.jpg".to_string(),
            },
            photo::Model {
                id: 2,
                post_id: 4,
                photo: "media/b.jpg".to_string(),
            },
        ];

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([photos])
                .into_connection(),
        );

        let repo = PhotoRepository::new(db);
        let result = repo.find_by_post(4).await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[1].photo, "media/b.jpg");
    }
}
