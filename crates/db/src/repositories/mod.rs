//! Database repositories.

mod comment;
mod favor;
mod photo;
mod post;
mod text_key;
mod user;

pub use comment::CommentRepository;
pub use favor::FavorRepository;
pub use photo::PhotoRepository;
pub use post::{NewPost, PostRepository};
pub use text_key::TextKeyRepository;
pub use user::UserRepository;

use pkucat_common::AppError;
use sea_orm::{DbErr, SqlErr};

/// Map a driver error onto the application error taxonomy.
///
/// Constraint violations are caused by the caller and surface as client
/// errors; everything else is a database fault.
pub(crate) fn map_db_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            AppError::Conflict(format!("Unique constraint violated: {detail}"))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            AppError::BadRequest(format!("Referenced record does not exist: {detail}"))
        }
        _ => AppError::Database(err.to_string()),
    }
}
