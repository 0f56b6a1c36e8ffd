//! Application state - shared across all handlers.

use std::sync::Arc;

use scribe_core::content::Sanitizer;
use scribe_core::ports::{AdminTokenVerifier, CategoryStore, PostStore};
use scribe_core::service::{CategoryService, PostService};
use scribe_infra::{MemoryStore, StaticTokenVerifier};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    pub categories: Arc<CategoryService>,
    pub admin_auth: Arc<dyn AdminTokenVerifier>,
}

impl AppState {
    /// Build the application state over the in-memory store adapter.
    pub fn new(config: &AppConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        let post_store: Arc<dyn PostStore> = store.clone();
        let category_store: Arc<dyn CategoryStore> = store;

        if config.admin_token.is_none() {
            tracing::warn!("ADMIN_TOKEN not set - the admin surface will reject every request");
        }

        tracing::info!("Application state initialized");

        Self {
            posts: Arc::new(PostService::new(
                post_store,
                category_store.clone(),
                Sanitizer::default(),
            )),
            categories: Arc::new(CategoryService::new(category_store)),
            admin_auth: Arc::new(StaticTokenVerifier::new(config.admin_token.as_deref())),
        }
    }
}
