use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Publication state of a post.
///
/// Parsed case-insensitively on input and serialized in the uppercase
/// wire form the admin editor sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    Draft,
    Published,
}

impl PostStatus {
    pub fn is_published(self) -> bool {
        matches!(self, PostStatus::Published)
    }
}

impl FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DRAFT" => Ok(PostStatus::Draft),
            "PUBLISHED" => Ok(PostStatus::Published),
            other => Err(DomainError::Validation(format!(
                "unknown status: {other}"
            ))),
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostStatus::Draft => f.write_str("DRAFT"),
            PostStatus::Published => f.write_str("PUBLISHED"),
        }
    }
}

/// Post entity - one blog entry with its draft/published lifecycle.
///
/// `content_raw` is the author's rich-text source of truth and is never
/// interpreted by the backend; `content_html` is always the sanitized
/// form of the rendered HTML that arrived with it. `published_at` is set
/// the first time the post enters PUBLISHED and never changes afterward,
/// even across unpublish/republish cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub category: Option<String>,
    pub status: PostStatus,
    pub content_raw: String,
    pub content_html: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Sort key for the newest-first index queries. Never-published
    /// drafts fall back to their creation time.
    pub fn sort_timestamp(&self) -> DateTime<Utc> {
        self.published_at.unwrap_or(self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("published".parse::<PostStatus>().unwrap(), PostStatus::Published);
        assert_eq!("PUBLISHED".parse::<PostStatus>().unwrap(), PostStatus::Published);
        assert_eq!("Draft".parse::<PostStatus>().unwrap(), PostStatus::Draft);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("ARCHIVED".parse::<PostStatus>().is_err());
        assert!("".parse::<PostStatus>().is_err());
    }

    #[test]
    fn status_displays_in_wire_form() {
        assert_eq!(PostStatus::Published.to_string(), "PUBLISHED");
        assert_eq!(PostStatus::Draft.to_string(), "DRAFT");
    }
}
