use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a persisted blog post.
///
/// `id` is assigned by the store on creation and never reused.
/// `updated_at` is refreshed on every successful mutation and is
/// always >= `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A candidate post payload - the fields a client supplies on create
/// and update, before the store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl PostDraft {
    /// Check the draft against the Post invariants: title, content and
    /// category must be present and non-empty (whitespace-only counts
    /// as empty). Collects every violation rather than stopping at the
    /// first. Pure, no I/O.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("title must be a non-empty string".to_string());
        }
        if self.content.trim().is_empty() {
            errors.push("content must be a non-empty string".to_string());
        }
        if self.category.trim().is_empty() {
            errors.push("category must be a non-empty string".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PostDraft {
        PostDraft {
            title: "Hi".to_string(),
            content: "World".to_string(),
            category: "news".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn empty_tags_are_allowed() {
        let mut d = draft();
        d.tags.clear();
        assert!(d.validate().is_ok());
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut d = draft();
        d.title = String::new();
        let errors = d.validate().unwrap_err();
        assert_eq!(errors, vec!["title must be a non-empty string"]);
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        let mut d = draft();
        d.content = "   ".to_string();
        d.category = "\t\n".to_string();
        let errors = d.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("content"));
        assert!(errors[1].contains("category"));
    }

    #[test]
    fn all_violations_are_collected() {
        let d = PostDraft {
            title: String::new(),
            content: String::new(),
            category: String::new(),
            tags: vec![],
        };
        assert_eq!(d.validate().unwrap_err().len(), 3);
    }

    #[test]
    fn post_serializes_with_camel_case_timestamps() {
        let now = Utc::now();
        let post = Post {
            id: 1,
            title: "Hi".to_string(),
            content: "World".to_string(),
            category: "news".to_string(),
            tags: vec!["a".to_string()],
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&post).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["id"], 1);
    }
}
