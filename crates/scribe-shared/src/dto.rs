//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use scribe_core::domain::{Category, Post, PostStatus};

/// Request to create a post. Required fields default to empty so that
/// missing keys flow into domain validation instead of a serde error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content_raw: String,
    #[serde(default)]
    pub content_html: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Request to update a post; absent fields leave the stored value
/// untouched. `category` distinguishes a missing key from an explicit
/// null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content_raw: Option<String>,
    #[serde(default)]
    pub content_html: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub category: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Request to create a category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// List-endpoint projection of a post: everything but the content
/// bodies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub category: Option<String>,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            slug: post.slug.clone(),
            excerpt: post.excerpt.clone(),
            category: post.category.clone(),
            status: post.status,
            created_at: post.created_at,
            updated_at: post.updated_at,
            published_at: post.published_at,
        }
    }
}

/// Single-post projection including both content forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
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

impl From<Post> for PostDetail {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            category: post.category,
            status: post.status,
            content_raw: post.content_raw,
            content_html: post.content_html,
            created_at: post.created_at,
            updated_at: post.updated_at,
            published_at: post.published_at,
        }
    }
}

/// Wire form of a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub name: String,
    pub description: Option<String>,
    pub post_count: i64,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            name: category.name,
            description: category.description,
            post_count: category.post_count,
        }
    }
}

/// `{posts, count}` list envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostSummary>,
    pub count: usize,
}

/// `{categories, count}` list envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryResponse>,
    pub count: usize,
}

/// Single-post envelope, with a message on mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub post: PostDetail,
}

impl PostEnvelope {
    pub fn new(post: PostDetail) -> Self {
        Self {
            message: None,
            post,
        }
    }

    pub fn with_message(post: PostDetail, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            post,
        }
    }
}

/// Single-category envelope, with a message on mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub category: CategoryResponse,
}

impl CategoryEnvelope {
    pub fn with_message(category: CategoryResponse, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            category,
        }
    }
}

/// Bare confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Result of the category cleanup sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupResponse {
    pub message: String,
    pub deleted_keys: Vec<String>,
}

/// Field-level deserializer distinguishing an absent key (outer `None`)
/// from an explicit `null` (inner `None`).
fn explicit_null<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
