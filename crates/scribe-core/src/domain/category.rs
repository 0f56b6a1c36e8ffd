use serde::{Deserialize, Serialize};

/// Category entity - a named tag carrying a denormalized count of the
/// published posts currently tagged with it.
///
/// The count is maintained incrementally by the consistency engine and
/// is approximate by contract: it is clamped at zero and never
/// recomputed from the post set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub description: Option<String>,
    pub post_count: i64,
}

impl Category {
    /// Create a category with an empty counter.
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
            post_count: 0,
        }
    }
}

/// Trim an author-supplied category reference; empty or whitespace-only
/// input normalizes to absent.
pub fn normalize_category(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
}
