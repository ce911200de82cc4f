//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! This crate owns the SQLite-backed post store.

pub mod database;

pub use database::SqlitePostRepository;
