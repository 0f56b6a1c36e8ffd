//! Identifier and slug helpers.

use uuid::Uuid;

/// Time-ordered unique ID for new posts. UUID v7 keeps the store's
/// newest-first index queries roughly aligned with creation order.
pub fn new_post_id() -> Uuid {
    Uuid::now_v7()
}

/// URL slug derived from a post title: lowercased alphanumerics joined
/// by single hyphens. Not guaranteed globally unique.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_sep = false;
    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            for lc in c.to_lowercase() {
                slug.push(lc);
            }
        } else {
            pending_sep = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_title() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn punctuation_collapses_to_one_hyphen() {
        assert_eq!(slugify("Rust 2024: What's New?"), "rust-2024-what-s-new");
    }

    #[test]
    fn leading_and_trailing_separators_are_dropped() {
        assert_eq!(slugify("--Hello!--"), "hello");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn unicode_letters_survive_lowercased() {
        assert_eq!(slugify("Café Société"), "café-société");
    }

    #[test]
    fn new_ids_are_unique_v7() {
        let a = new_post_id();
        let b = new_post_id();
        assert_ne!(a, b);
        assert_eq!(a.get_version_num(), 7);
    }
}
