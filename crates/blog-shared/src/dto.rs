//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Body of POST /posts and PUT /posts/{id}.
///
/// `tags` may be omitted and defaults to empty; when present it must be
/// an array of strings (anything else is rejected at deserialization).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Query string of GET /posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive substring filter over title/content/category.
    pub term: Option<String>,
}
