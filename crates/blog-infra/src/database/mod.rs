//! Database connection management and the SQLite post store.

mod connections;
pub mod entity;
mod sqlite_repo;

pub use connections::{DatabaseConfig, connect};
pub use sea_orm::DbErr;
pub use sqlite_repo::SqlitePostRepository;

#[cfg(test)]
mod tests;
