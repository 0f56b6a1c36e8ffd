//! In-memory single-table store.
//!
//! One ordered map holds both record kinds under `BLOG#`/`CATEGORY#`
//! keys, mirroring the production single-table layout. The two
//! secondary access paths are served by filter+sort over the table -
//! O(n), which is the documented tolerance for this adapter.
//! Data is lost on process restart.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use scribe_core::domain::{Category, Post, PostStatus};
use scribe_core::error::StoreError;
use scribe_core::ports::{CategoryStore, PostStore};

#[derive(Clone)]
enum Record {
    Post(Post),
    Category(Category),
}

/// Single-table store behind an async RwLock.
pub struct MemoryStore {
    table: RwLock<BTreeMap<String, Record>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(BTreeMap::new()),
        }
    }

    fn post_key(id: Uuid) -> String {
        format!("BLOG#{id}")
    }

    fn category_key(name: &str) -> String {
        format!("CATEGORY#{name}")
    }

    async fn collect_posts<F>(&self, keep: F) -> Vec<Post>
    where
        F: Fn(&Post) -> bool,
    {
        let table = self.table.read().await;
        table
            .values()
            .filter_map(|record| match record {
                Record::Post(post) if keep(post) => Some(post.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn sort_and_page(mut posts: Vec<Post>, limit: Option<usize>, newest_first: bool) -> Vec<Post> {
    // Ties on the range key fall back to the time-ordered id.
    if newest_first {
        posts.sort_by_key(|post| Reverse((post.sort_timestamp(), post.id)));
    } else {
        posts.sort_by_key(|post| (post.sort_timestamp(), post.id));
    }
    posts.truncate(limit.unwrap_or(usize::MAX));
    posts
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn put(&self, post: Post) -> Result<(), StoreError> {
        let mut table = self.table.write().await;
        table.insert(Self::post_key(post.id), Record::Post(post));
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let table = self.table.read().await;
        Ok(match table.get(&Self::post_key(id)) {
            Some(Record::Post(post)) => Some(post.clone()),
            _ => None,
        })
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut table = self.table.write().await;
        table.remove(&Self::post_key(id));
        Ok(())
    }

    async fn query_by_status(
        &self,
        status: PostStatus,
        limit: Option<usize>,
        newest_first: bool,
    ) -> Result<Vec<Post>, StoreError> {
        let posts = self.collect_posts(|post| post.status == status).await;
        Ok(sort_and_page(posts, limit, newest_first))
    }

    async fn query_by_category(
        &self,
        category: &str,
        limit: Option<usize>,
        newest_first: bool,
        status: Option<PostStatus>,
    ) -> Result<Vec<Post>, StoreError> {
        let posts = self
            .collect_posts(|post| {
                post.category.as_deref() == Some(category)
                    && status.is_none_or(|s| post.status == s)
            })
            .await;
        Ok(sort_and_page(posts, limit, newest_first))
    }

    async fn scan(&self, limit: Option<usize>) -> Result<Vec<Post>, StoreError> {
        let mut posts = self.collect_posts(|_| true).await;
        posts.sort_by_key(|post| Reverse((post.created_at, post.id)));
        posts.truncate(limit.unwrap_or(usize::MAX));
        Ok(posts)
    }
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn put(&self, category: Category) -> Result<(), StoreError> {
        let mut table = self.table.write().await;
        table.insert(
            Self::category_key(&category.name),
            Record::Category(category),
        );
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<Category>, StoreError> {
        let table = self.table.read().await;
        Ok(match table.get(&Self::category_key(name)) {
            Some(Record::Category(category)) => Some(category.clone()),
            _ => None,
        })
    }

    async fn delete(&self, name: &str) -> Result<(), StoreError> {
        let mut table = self.table.write().await;
        table.remove(&Self::category_key(name));
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Category>, StoreError> {
        let table = self.table.read().await;
        Ok(table
            .values()
            .filter_map(|record| match record {
                Record::Category(category) => Some(category.clone()),
                _ => None,
            })
            .collect())
    }
}
