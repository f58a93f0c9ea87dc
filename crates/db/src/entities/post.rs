//! Post entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Maximum length of the post text, in characters.
pub const TEXT_MAX_LEN: usize = 2000;

/// Maximum length of the video location.
pub const VIDEO_MAX_LEN: usize = 128;

/// Kind of media attached to a post.
///
/// Stored as the nullable `is_video` column: `true` is a video, `false` is a
/// set of photos and `NULL` means the post carries no media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A single video stored in `video`.
    Video,
    /// One or more rows in `photo`.
    Image,
    /// No attachment.
    None,
}

impl MediaKind {
    /// Decode the `is_video` column.
    #[must_use]
    pub const fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => Self::Video,
            Some(false) => Self::Image,
            None => Self::None,
        }
    }

    /// Encode as the `is_video` column.
    #[must_use]
    pub const fn as_flag(self) -> Option<bool> {
        match self {
            Self::Video => Some(true),
            Self::Image => Some(false),
            Self::None => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Author user ID
    #[sea_orm(indexed)]
    pub publisher_id: i32,

    /// Creation time, never updated
    pub time: DateTimeWithTimeZone,

    /// Post text content
    #[sea_orm(column_type = "String(StringLen::N(2000))", nullable)]
    pub text: Option<String>,

    /// `true` = video, `false` = photos, `NULL` = no media
    #[sea_orm(nullable)]
    pub is_video: Option<bool>,

    /// Video location, only set when `is_video` is true
    #[sea_orm(column_type = "String(StringLen::N(128))", nullable)]
    pub video: Option<String>,
}

impl Model {
    /// The kind of media this post carries.
    #[must_use]
    pub const fn media_kind(&self) -> MediaKind {
        MediaKind::from_flag(self.is_video)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::PublisherId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Publisher,

    #[sea_orm(has_many = "super::comment::Entity")]
    Comments,

    #[sea_orm(has_many = "super::photo::Entity")]
    Photos,

    #[sea_orm(has_many = "super::favor::Entity")]
    Favors,

    #[sea_orm(has_many = "super::text_key::Entity")]
    TextKeys,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Publisher.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<super::photo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Photos.def()
    }
}

impl Related<super::favor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favors.def()
    }
}

impl Related<super::text_key::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TextKeys.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
