//! Content pipeline - HTML sanitization, excerpt derivation, slugs and
//! time-ordered identifiers.

mod sanitize;
mod slug;

pub use sanitize::{DEFAULT_EXCERPT_CHARS, SanitizePolicy, Sanitizer};
pub use slug::{new_post_id, slugify};
