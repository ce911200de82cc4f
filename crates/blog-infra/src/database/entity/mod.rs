//! SeaORM entities for the posts table.

pub mod post;
