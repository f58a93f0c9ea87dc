//! Business logic services.

#![allow(missing_docs)]

pub mod comment;
pub mod favor;
pub mod keyword;
pub mod post;
pub mod user;

pub use comment::{CommentService, CreateCommentInput};
pub use favor::FavorService;
pub use keyword::extract_keywords;
pub use post::{CreatePostInput, MediaInput, PostDetail, PostService};
pub use user::{CreateUserInput, UserService};
