//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub category: String,
    /// JSON-serialized list of tag labels.
    #[sea_orm(column_type = "Text")]
    pub tags: String,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTimeUtc,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for blog_core::domain::Post {
    fn from(model: Model) -> Self {
        // A row written by this store always holds a valid JSON array;
        // anything else deserializes to no tags rather than failing the read.
        let tags = serde_json::from_str(&model.tags).unwrap_or_default();

        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            category: model.category,
            tags,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
