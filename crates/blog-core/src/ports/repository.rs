use async_trait::async_trait;

use crate::domain::{Post, PostDraft};
use crate::error::RepoError;

/// Post store - owns the persisted representation of posts.
///
/// Each operation is a single atomic statement against the underlying
/// table; conflicting writes are serialized by the storage engine, not
/// by callers.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post. Assigns a fresh unique id and sets
    /// `created_at` = `updated_at` = now.
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Exact-match lookup by primary key.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// All posts in ascending id order. With a term, only posts whose
    /// title, content or category contains it case-insensitively.
    /// An empty result is a normal outcome, not an error.
    async fn list(&self, term: Option<&str>) -> Result<Vec<Post>, RepoError>;

    /// Full replace of title/content/category/tags, refreshing
    /// `updated_at` and leaving `id`/`created_at` untouched.
    /// Returns `None` when no row has that id.
    async fn update(&self, id: i64, draft: PostDraft) -> Result<Option<Post>, RepoError>;

    /// Remove the row. `RepoError::NotFound` when no row has that id.
    async fn delete(&self, id: i64) -> Result<(), RepoError>;
}
