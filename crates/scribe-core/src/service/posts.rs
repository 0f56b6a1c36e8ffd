//! The post/category consistency engine and the post query surface.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::content::{DEFAULT_EXCERPT_CHARS, Sanitizer, new_post_id, slugify};
use crate::domain::{Post, PostStatus, normalize_category};
use crate::error::DomainError;
use crate::ports::{CategoryStore, PostStore};

use super::categories::apply_category_delta;

/// Public list endpoints page at 10 by default and never above 50.
pub const PUBLIC_LIST_DEFAULT: usize = 10;
pub const PUBLIC_LIST_MAX: usize = 50;

/// Admin listings page wider: 20 by default, hard max 100.
pub const ADMIN_LIST_DEFAULT: usize = 20;
pub const ADMIN_LIST_MAX: usize = 100;

/// Input for creating a post.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub content_raw: String,
    pub content_html: String,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

/// Partial update; absent fields leave the stored value untouched.
/// `category` distinguishes "key missing" from an explicit null - both
/// spellings of "no category" normalize to absent, but only a supplied
/// key changes the field at all.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content_raw: Option<String>,
    pub content_html: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<Option<String>>,
    pub status: Option<String>,
}

/// Orchestrates post writes so every status/category transition is
/// reflected exactly once in the matching category counter.
///
/// The counter write is a separate read-modify-write after the post
/// write - not transactional, by contract. The counters are documented
/// approximate and concurrent edits of one counter can lose an update.
pub struct PostService {
    posts: Arc<dyn PostStore>,
    categories: Arc<dyn CategoryStore>,
    sanitizer: Sanitizer,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostStore>,
        categories: Arc<dyn CategoryStore>,
        sanitizer: Sanitizer,
    ) -> Self {
        Self {
            posts,
            categories,
            sanitizer,
        }
    }

    /// Create a post. Status defaults to DRAFT; the rendered HTML is
    /// sanitized before it is stored and the excerpt is derived from it
    /// when the author supplies none. A post born PUBLISHED with a
    /// category bumps that category's counter.
    pub async fn create(&self, input: NewPost) -> Result<Post, DomainError> {
        let mut missing = Vec::new();
        if input.title.is_empty() {
            missing.push("title");
        }
        if input.content_raw.is_empty() {
            missing.push("content_raw");
        }
        if input.content_html.is_empty() {
            missing.push("content_html");
        }
        if !missing.is_empty() {
            return Err(DomainError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }

        let now = Utc::now();
        let status = match input.status.as_deref() {
            Some(s) if !s.is_empty() => s.parse()?,
            _ => PostStatus::Draft,
        };

        let content_html = self.sanitizer.sanitize(&input.content_html);
        let excerpt = match input.excerpt {
            Some(e) if !e.is_empty() => e,
            _ => self
                .sanitizer
                .derive_excerpt(&content_html, DEFAULT_EXCERPT_CHARS),
        };
        let category = normalize_category(input.category.as_deref());
        let slug = slugify(&input.title);

        let post = Post {
            id: new_post_id(),
            title: input.title,
            slug,
            excerpt,
            category: category.clone(),
            status,
            content_raw: input.content_raw,
            content_html,
            created_at: now,
            updated_at: now,
            published_at: status.is_published().then_some(now),
        };

        self.posts.put(post.clone()).await?;

        if status.is_published() {
            if let Some(name) = &category {
                apply_category_delta(self.categories.as_ref(), name, 1).await?;
            }
        }

        Ok(post)
    }

    /// Apply a partial update, then fold the (old status, old category)
    /// and (new status, new category) pair into exactly one counter
    /// transition.
    pub async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post, DomainError> {
        let mut post = self
            .posts
            .get(id)
            .await?
            .ok_or(DomainError::NotFound { entity: "Blog post" })?;

        let old_status = post.status;
        let old_category = post.category.clone();
        let now = Utc::now();

        if let Some(title) = patch.title {
            post.slug = slugify(&title);
            post.title = title;
        }

        if let Some(html) = patch.content_html {
            post.content_html = self.sanitizer.sanitize(&html);
            // Keep the excerpt in step unless this patch pins it.
            if patch.excerpt.is_none() {
                post.excerpt = self
                    .sanitizer
                    .derive_excerpt(&post.content_html, DEFAULT_EXCERPT_CHARS);
            }
        }

        if let Some(raw) = patch.content_raw {
            post.content_raw = raw;
        }

        if let Some(excerpt) = patch.excerpt {
            post.excerpt = excerpt;
        }

        if let Some(category) = patch.category {
            post.category = normalize_category(category.as_deref());
        }

        if let Some(status) = patch.status.as_deref() {
            if !status.is_empty() {
                let new_status: PostStatus = status.parse()?;
                // First publish stamps the timestamp; later republish
                // cycles leave it alone.
                if new_status.is_published()
                    && !old_status.is_published()
                    && post.published_at.is_none()
                {
                    post.published_at = Some(now);
                }
                post.status = new_status;
            }
        }

        post.updated_at = now;
        self.posts.put(post.clone()).await?;

        let new_category = post.category.clone();
        match (old_status.is_published(), post.status.is_published()) {
            (true, false) => {
                if let Some(name) = &old_category {
                    apply_category_delta(self.categories.as_ref(), name, -1).await?;
                }
            }
            (false, true) => {
                if let Some(name) = &new_category {
                    apply_category_delta(self.categories.as_ref(), name, 1).await?;
                }
            }
            (true, true) if old_category != new_category => {
                if let Some(name) = &old_category {
                    apply_category_delta(self.categories.as_ref(), name, -1).await?;
                }
                if let Some(name) = &new_category {
                    apply_category_delta(self.categories.as_ref(), name, 1).await?;
                }
            }
            _ => {}
        }

        Ok(post)
    }

    /// Delete a post, decrementing its category counter first when the
    /// post is currently published.
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let post = self
            .posts
            .get(id)
            .await?
            .ok_or(DomainError::NotFound { entity: "Blog post" })?;

        if post.status.is_published() {
            if let Some(name) = &post.category {
                apply_category_delta(self.categories.as_ref(), name, -1).await?;
            }
        }

        self.posts.delete(id).await?;
        Ok(())
    }

    /// Admin fetch - any status.
    pub async fn get(&self, id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .get(id)
            .await?
            .ok_or(DomainError::NotFound { entity: "Blog post" })
    }

    /// Admin listing - optionally filtered by status, otherwise a scan.
    pub async fn list(
        &self,
        status: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Post>, DomainError> {
        let limit = limit.unwrap_or(ADMIN_LIST_DEFAULT).min(ADMIN_LIST_MAX);
        let posts = match status {
            Some(s) if !s.is_empty() => {
                self.posts
                    .query_by_status(s.parse()?, Some(limit), true)
                    .await?
            }
            _ => self.posts.scan(Some(limit)).await?,
        };
        Ok(posts)
    }

    /// Published posts, newest first, optionally filtered by category.
    pub async fn published(
        &self,
        category: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Post>, DomainError> {
        let limit = limit.unwrap_or(PUBLIC_LIST_DEFAULT).min(PUBLIC_LIST_MAX);
        let posts = match category {
            Some(c) if !c.is_empty() => {
                self.posts
                    .query_by_category(c, Some(limit), true, Some(PostStatus::Published))
                    .await?
            }
            _ => {
                self.posts
                    .query_by_status(PostStatus::Published, Some(limit), true)
                    .await?
            }
        };
        Ok(posts)
    }

    /// The single most recently published post.
    pub async fn latest_published(&self) -> Result<Post, DomainError> {
        self.posts
            .query_by_status(PostStatus::Published, Some(1), true)
            .await?
            .into_iter()
            .next()
            .ok_or(DomainError::NotFound {
                entity: "Published blog post",
            })
    }

    /// Public fetch by id. Drafts stay invisible here even when fetched
    /// by exact id.
    pub async fn published_by_id(&self, id: Uuid) -> Result<Post, DomainError> {
        match self.posts.get(id).await? {
            Some(post) if post.status.is_published() => Ok(post),
            _ => Err(DomainError::NotFound { entity: "Blog post" }),
        }
    }

    /// First published post carrying `slug`. Linear in the published
    /// set; a dedicated slug index would replace this if it ever grows
    /// expensive.
    pub async fn published_by_slug(&self, slug: &str) -> Result<Post, DomainError> {
        self.posts
            .query_by_status(PostStatus::Published, None, true)
            .await?
            .into_iter()
            .find(|post| post.slug == slug)
            .ok_or(DomainError::NotFound { entity: "Blog post" })
    }
}
