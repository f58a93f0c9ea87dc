//! Database entities.

pub mod comment;
pub mod favor;
pub mod photo;
pub mod post;
pub mod text_key;
pub mod user;

pub use comment::Entity as Comment;
pub use favor::Entity as Favor;
pub use photo::Entity as Photo;
pub use post::Entity as Post;
pub use text_key::Entity as TextKey;
pub use user::Entity as User;
