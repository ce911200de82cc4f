use blog_core::domain::{Post, PostDraft};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use crate::database::entity::post;
use crate::database::sqlite_repo::SqlitePostRepository;

fn model(id: i64, title: &str, tags: &str) -> post::Model {
    let now = chrono::Utc::now();
    post::Model {
        id,
        title: title.to_owned(),
        content: "Content".to_owned(),
        category: "news".to_owned(),
        tags: tags.to_owned(),
        created_at: now,
        updated_at: now,
    }
}

fn draft() -> PostDraft {
    PostDraft {
        title: "Hi".to_owned(),
        content: "World".to_owned(),
        category: "news".to_owned(),
        tags: vec!["a".to_owned(), "b".to_owned()],
    }
}

#[tokio::test]
async fn find_post_by_id_maps_the_row() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results(vec![vec![model(7, "Test Post", r#"["a","b"]"#)]])
        .into_connection();

    let repo = SqlitePostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(7).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.id, 7);
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.tags, vec!["a", "b"]);
}

#[tokio::test]
async fn find_post_by_id_returns_none_for_missing_row() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = SqlitePostRepository::new(db);

    assert!(repo.find_by_id(99).await.unwrap().is_none());
}

#[tokio::test]
async fn create_returns_the_stored_post() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 1,
            rows_affected: 1,
        }])
        .append_query_results(vec![vec![model(1, "Hi", r#"["a","b"]"#)]])
        .into_connection();

    let repo = SqlitePostRepository::new(db);

    let post = repo.create(draft()).await.unwrap();

    assert_eq!(post.id, 1);
    assert_eq!(post.title, "Hi");
    assert_eq!(post.tags, vec!["a", "b"]);
}

#[tokio::test]
async fn delete_missing_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = SqlitePostRepository::new(db);

    let err = repo.delete(42).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn delete_existing_row_succeeds() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = SqlitePostRepository::new(db);

    assert!(repo.delete(1).await.is_ok());
}

#[tokio::test]
async fn list_preserves_row_order_and_tolerates_bad_tags() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results(vec![vec![
            model(1, "first", r#"["x"]"#),
            model(2, "second", "not json"),
        ]])
        .into_connection();

    let repo = SqlitePostRepository::new(db);

    let posts = repo.list(None).await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, 1);
    assert_eq!(posts[0].tags, vec!["x"]);
    assert_eq!(posts[1].id, 2);
    assert!(posts[1].tags.is_empty());
}
