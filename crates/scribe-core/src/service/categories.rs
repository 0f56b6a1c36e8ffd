//! Category administration and the shared counter-delta primitive.

use std::sync::Arc;

use crate::domain::Category;
use crate::error::DomainError;
use crate::ports::CategoryStore;

pub struct CategoryService {
    categories: Arc<dyn CategoryStore>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryStore>) -> Self {
        Self { categories }
    }

    /// Create a category with an empty counter. The trimmed name is the
    /// identity key; an existing record under it is a conflict.
    pub async fn create(
        &self,
        name: &str,
        description: Option<String>,
    ) -> Result<Category, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation(
                "category name is required".to_string(),
            ));
        }

        if self.categories.get(name).await?.is_some() {
            return Err(DomainError::Conflict(format!("category '{name}'")));
        }

        let category = Category::new(name, description);
        self.categories.put(category.clone()).await?;
        Ok(category)
    }

    /// Delete a category record. Posts referencing the name keep their
    /// dangling reference.
    pub async fn delete(&self, name: &str) -> Result<(), DomainError> {
        if self.categories.get(name).await?.is_none() {
            return Err(DomainError::NotFound { entity: "Category" });
        }
        self.categories.delete(name).await?;
        Ok(())
    }

    /// Defensive sweep: remove every category whose name is empty or
    /// whitespace-only. Returns the names of the removed records.
    pub async fn cleanup(&self) -> Result<Vec<String>, DomainError> {
        let mut removed = Vec::new();
        for category in self.categories.scan().await? {
            if category.name.trim().is_empty() {
                self.categories.delete(&category.name).await?;
                removed.push(category.name);
            }
        }
        Ok(removed)
    }

    /// List categories. The public surface passes `include_invalid =
    /// false`; the admin surface sees everything so cleanup targets are
    /// visible.
    pub async fn list(&self, include_invalid: bool) -> Result<Vec<Category>, DomainError> {
        let mut categories = self.categories.scan().await?;
        if !include_invalid {
            categories.retain(|category| !category.name.trim().is_empty());
        }
        Ok(categories)
    }
}

/// Best-effort counter arithmetic shared by the consistency engine.
///
/// Whitespace names are skipped entirely. An existing record clamps at
/// zero; a missing record is only created for a positive delta, so a
/// stray decrement never fabricates a negative-count category.
pub(crate) async fn apply_category_delta(
    store: &dyn CategoryStore,
    name: &str,
    delta: i64,
) -> Result<(), DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(());
    }

    match store.get(name).await? {
        Some(mut category) => {
            category.post_count = (category.post_count + delta).max(0);
            store.put(category).await?;
        }
        None if delta > 0 => {
            store
                .put(Category {
                    name: name.to_string(),
                    description: None,
                    post_count: delta,
                })
                .await?;
        }
        None => {}
    }
    Ok(())
}
