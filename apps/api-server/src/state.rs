//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::database::{self, DatabaseConfig, DbErr, SqlitePostRepository};

/// Shared application state.
///
/// The store handle is opened once at startup and injected here; no
/// handler reaches for ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Connect to the database and build the application state.
    pub async fn new(db_config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = database::connect(db_config).await?;
        let posts: Arc<dyn PostRepository> = Arc::new(SqlitePostRepository::new(db));

        tracing::info!("Application state initialized");

        Ok(Self { posts })
    }
}
