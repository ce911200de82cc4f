//! SQLite post store implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbConn, EntityTrait, IntoActiveModel, NotSet,
    QueryFilter, QueryOrder, Set,
};

use blog_core::domain::{Post, PostDraft};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// SQLite-backed post store.
///
/// Every operation is a single statement; the storage engine serializes
/// conflicting writes.
pub struct SqlitePostRepository {
    db: DbConn,
}

impl SqlitePostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn encode_tags(tags: &[String]) -> Result<String, RepoError> {
    serde_json::to_string(tags).map_err(|e| RepoError::Query(e.to_string()))
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let now = Utc::now();
        let model = post::ActiveModel {
            id: NotSet,
            title: Set(draft.title),
            content: Set(draft.content),
            category: Set(draft.category),
            tags: Set(encode_tags(&draft.tags)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = model
            .insert(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        tracing::debug!(post_id = created.id, "Inserted post");
        Ok(created.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn list(&self, term: Option<&str>) -> Result<Vec<Post>, RepoError> {
        let mut query = PostEntity::find().order_by_asc(post::Column::Id);

        if let Some(term) = term {
            // LIKE in SQLite is case-insensitive for ASCII, which is the
            // contract for term filtering.
            query = query.filter(
                Condition::any()
                    .add(post::Column::Title.contains(term))
                    .add(post::Column::Content.contains(term))
                    .add(post::Column::Category.contains(term)),
            );
        }

        let rows = query
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, draft: PostDraft) -> Result<Option<Post>, RepoError> {
        let Some(existing) = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
        else {
            return Ok(None);
        };

        // Full replace of the client-supplied fields; id and created_at
        // stay untouched.
        let mut active = existing.into_active_model();
        active.title = Set(draft.title);
        active.content = Set(draft.content);
        active.category = Set(draft.category);
        active.tags = Set(encode_tags(&draft.tags)?);
        active.updated_at = Set(Utc::now());

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
