//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;

use quill_core::domain::{Post, normalize_media};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub meta_title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub meta_description: Option<String>,
    pub tags: Option<String>,
    pub status: String,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain Post.
///
/// The read path is where blank media values from legacy rows or direct
/// writes are folded into "absent", keeping the invariant that consumers
/// never observe an empty-string URL.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            meta_title: model.meta_title,
            meta_description: model.meta_description,
            tags: model.tags,
            // Rows carrying an unknown status read as drafts, which keeps
            // them out of the public feed.
            status: model.status.parse().unwrap_or_default(),
            image_url: normalize_media(model.image_url),
            video_url: normalize_media(model.video_url),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
