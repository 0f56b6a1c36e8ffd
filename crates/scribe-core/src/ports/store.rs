use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Category, Post, PostStatus};
use crate::error::StoreError;

/// Post records, keyed by id, with two secondary access paths:
/// status+publish-date and category+publish-date.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Write a post record (create or replace).
    async fn put(&self, post: Post) -> Result<(), StoreError>;

    /// Read a post record by id.
    async fn get(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// Remove a post record; removing an absent key is not an error.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    /// Posts with the given status, ordered by publish date. A `limit`
    /// of `None` reads the full index.
    async fn query_by_status(
        &self,
        status: PostStatus,
        limit: Option<usize>,
        newest_first: bool,
    ) -> Result<Vec<Post>, StoreError>;

    /// Posts in the given category, optionally restricted to one status.
    async fn query_by_category(
        &self,
        category: &str,
        limit: Option<usize>,
        newest_first: bool,
        status: Option<PostStatus>,
    ) -> Result<Vec<Post>, StoreError>;

    /// Full scan over post records, newest created first.
    async fn scan(&self, limit: Option<usize>) -> Result<Vec<Post>, StoreError>;
}

/// Category records, keyed by exact case-sensitive name.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Write a category record (create or replace).
    async fn put(&self, category: Category) -> Result<(), StoreError>;

    /// Read a category record by name.
    async fn get(&self, name: &str) -> Result<Option<Category>, StoreError>;

    /// Remove a category record; removing an absent key is not an error.
    async fn delete(&self, name: &str) -> Result<(), StoreError>;

    /// All category records, in no particular order.
    async fn scan(&self) -> Result<Vec<Category>, StoreError>;
}
