#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use uuid::Uuid;

    use scribe_core::content::Sanitizer;
    use scribe_core::domain::{Category, Post, PostStatus};
    use scribe_core::error::DomainError;
    use scribe_core::ports::{CategoryStore, PostStore};
    use scribe_core::service::{CategoryService, NewPost, PostPatch, PostService};

    use crate::store::MemoryStore;

    fn services() -> (PostService, CategoryService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let posts = PostService::new(store.clone(), store.clone(), Sanitizer::default());
        let categories = CategoryService::new(store.clone());
        (posts, categories, store)
    }

    fn draft_input(title: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            content_raw: r#"{"ops":[{"insert":"hello"}]}"#.to_string(),
            content_html: "<p>hello world</p>".to_string(),
            ..NewPost::default()
        }
    }

    fn published_input(title: &str, category: &str) -> NewPost {
        NewPost {
            status: Some("published".to_string()),
            category: Some(category.to_string()),
            ..draft_input(title)
        }
    }

    async fn count_of(store: &MemoryStore, name: &str) -> Option<i64> {
        CategoryStore::get(store, name)
            .await
            .unwrap()
            .map(|category| category.post_count)
    }

    #[tokio::test]
    async fn create_published_post_counts_its_category() {
        let (posts, _, store) = services();

        let post = posts.create(published_input("First", "Tech")).await.unwrap();

        assert_eq!(post.status, PostStatus::Published);
        assert_eq!(post.category.as_deref(), Some("Tech"));
        assert!(post.published_at.is_some());
        assert_eq!(count_of(&store, "Tech").await, Some(1));
    }

    #[tokio::test]
    async fn create_draft_touches_no_counter() {
        let (posts, _, store) = services();

        let input = NewPost {
            category: Some("Tech".to_string()),
            ..draft_input("Draft")
        };
        let post = posts.create(input).await.unwrap();

        assert_eq!(post.status, PostStatus::Draft);
        assert!(post.published_at.is_none());
        assert_eq!(count_of(&store, "Tech").await, None);
    }

    #[tokio::test]
    async fn unpublish_decrements_the_old_category() {
        let (posts, _, store) = services();
        let post = posts.create(published_input("First", "Tech")).await.unwrap();

        let updated = posts
            .update(
                post.id,
                PostPatch {
                    status: Some("DRAFT".to_string()),
                    ..PostPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, PostStatus::Draft);
        assert_eq!(count_of(&store, "Tech").await, Some(0));
    }

    #[tokio::test]
    async fn counter_clamps_at_zero() {
        let (posts, _, store) = services();
        let post = posts.create(published_input("First", "Tech")).await.unwrap();

        // Simulate drift: someone already zeroed the counter.
        CategoryStore::put(
            store.as_ref(),
            Category {
                name: "Tech".to_string(),
                description: None,
                post_count: 0,
            },
        )
        .await
        .unwrap();

        posts.delete(post.id).await.unwrap();
        assert_eq!(count_of(&store, "Tech").await, Some(0));
    }

    #[tokio::test]
    async fn category_switch_while_published_moves_one_count() {
        let (posts, _, store) = services();
        let post = posts.create(published_input("First", "Tech")).await.unwrap();

        posts
            .update(
                post.id,
                PostPatch {
                    category: Some(Some("Life".to_string())),
                    ..PostPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(count_of(&store, "Tech").await, Some(0));
        assert_eq!(count_of(&store, "Life").await, Some(1));
    }

    #[tokio::test]
    async fn explicit_null_category_clears_and_decrements() {
        let (posts, _, store) = services();
        let post = posts.create(published_input("First", "Tech")).await.unwrap();

        let updated = posts
            .update(
                post.id,
                PostPatch {
                    category: Some(None),
                    ..PostPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.category, None);
        assert_eq!(count_of(&store, "Tech").await, Some(0));
    }

    #[tokio::test]
    async fn published_edit_without_transition_leaves_counts_alone() {
        let (posts, _, store) = services();
        let post = posts.create(published_input("First", "Tech")).await.unwrap();

        posts
            .update(
                post.id,
                PostPatch {
                    title: Some("Second".to_string()),
                    ..PostPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(count_of(&store, "Tech").await, Some(1));
    }

    #[tokio::test]
    async fn republish_keeps_the_first_publish_timestamp() {
        let (posts, _, store) = services();
        let post = posts.create(published_input("First", "Tech")).await.unwrap();
        let first_published_at = post.published_at.unwrap();

        posts
            .update(
                post.id,
                PostPatch {
                    status: Some("draft".to_string()),
                    ..PostPatch::default()
                },
            )
            .await
            .unwrap();
        let republished = posts
            .update(
                post.id,
                PostPatch {
                    status: Some("published".to_string()),
                    ..PostPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(republished.published_at, Some(first_published_at));
        assert_eq!(count_of(&store, "Tech").await, Some(1));
    }

    #[tokio::test]
    async fn delete_published_post_decrements_before_removal() {
        let (posts, _, store) = services();
        let post = posts.create(published_input("First", "Tech")).await.unwrap();

        posts.delete(post.id).await.unwrap();

        assert_eq!(count_of(&store, "Tech").await, Some(0));
        assert!(matches!(
            posts.get(post.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn decrement_against_a_missing_category_is_dropped() {
        let (posts, categories, store) = services();
        let post = posts.create(published_input("First", "Tech")).await.unwrap();

        categories.delete("Tech").await.unwrap();
        posts
            .update(
                post.id,
                PostPatch {
                    status: Some("DRAFT".to_string()),
                    ..PostPatch::default()
                },
            )
            .await
            .unwrap();

        // No negative-count record gets fabricated.
        assert_eq!(count_of(&store, "Tech").await, None);
    }

    #[tokio::test]
    async fn create_validates_required_fields() {
        let (posts, _, _) = services();

        let err = posts
            .create(NewPost {
                content_raw: "{}".to_string(),
                content_html: "<p>x</p>".to_string(),
                ..NewPost::default()
            })
            .await
            .unwrap_err();

        match err {
            DomainError::Validation(msg) => assert!(msg.contains("title")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_rejects_unknown_status() {
        let (posts, _, _) = services();

        let input = NewPost {
            status: Some("ARCHIVED".to_string()),
            ..draft_input("First")
        };
        assert!(matches!(
            posts.create(input).await,
            Err(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn whitespace_category_normalizes_to_absent() {
        let (posts, _, store) = services();

        let input = NewPost {
            status: Some("PUBLISHED".to_string()),
            category: Some("   ".to_string()),
            ..draft_input("First")
        };
        let post = posts.create(input).await.unwrap();

        assert_eq!(post.category, None);
        assert!(CategoryStore::scan(store.as_ref()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn content_is_sanitized_on_create() {
        let (posts, _, _) = services();

        let input = NewPost {
            content_html: "<p>hi</p><script>alert(1)</script>".to_string(),
            ..draft_input("First")
        };
        let post = posts.create(input).await.unwrap();

        assert!(!post.content_html.contains("<script"));
        assert!(post.content_html.contains("<p>hi</p>"));
    }

    #[tokio::test]
    async fn partial_update_leaves_other_fields_alone() {
        let (posts, _, _) = services();
        let post = posts.create(draft_input("First")).await.unwrap();

        let updated = posts
            .update(
                post.id,
                PostPatch {
                    title: Some("Second Thoughts".to_string()),
                    ..PostPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Second Thoughts");
        assert_eq!(updated.slug, "second-thoughts");
        assert_eq!(updated.content_html, post.content_html);
        assert_eq!(updated.excerpt, post.excerpt);
        assert!(updated.updated_at >= post.updated_at);
    }

    #[tokio::test]
    async fn content_update_regenerates_excerpt_unless_pinned() {
        let (posts, _, _) = services();
        let post = posts.create(draft_input("First")).await.unwrap();

        let regenerated = posts
            .update(
                post.id,
                PostPatch {
                    content_html: Some("<p>brand new body</p>".to_string()),
                    ..PostPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(regenerated.excerpt, "brand new body");

        let pinned = posts
            .update(
                post.id,
                PostPatch {
                    content_html: Some("<p>even newer body</p>".to_string()),
                    excerpt: Some("hand-written summary".to_string()),
                    ..PostPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(pinned.excerpt, "hand-written summary");
    }

    #[tokio::test]
    async fn update_of_missing_post_is_not_found() {
        let (posts, _, _) = services();

        let err = posts
            .update(Uuid::now_v7(), PostPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn drafts_are_invisible_to_the_public_surface() {
        let (posts, _, _) = services();
        let post = posts.create(draft_input("Hidden")).await.unwrap();

        assert!(matches!(
            posts.published_by_id(post.id).await,
            Err(DomainError::NotFound { .. })
        ));
        // The admin path sees the same record.
        assert_eq!(posts.get(post.id).await.unwrap().id, post.id);
    }

    #[tokio::test]
    async fn slug_lookup_finds_the_published_post() {
        let (posts, _, _) = services();
        posts.create(draft_input("Hello World")).await.unwrap();
        let published = posts
            .create(published_input("Hello World", "Tech"))
            .await
            .unwrap();

        let found = posts.published_by_slug("hello-world").await.unwrap();
        assert_eq!(found.id, published.id);

        assert!(matches!(
            posts.published_by_slug("no-such-slug").await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn latest_published_returns_the_newest() {
        let (posts, _, _) = services();
        posts.create(published_input("Old", "Tech")).await.unwrap();
        let newest = posts.create(published_input("New", "Tech")).await.unwrap();

        assert_eq!(posts.latest_published().await.unwrap().id, newest.id);
    }

    #[tokio::test]
    async fn latest_published_with_no_posts_is_not_found() {
        let (posts, _, _) = services();
        assert!(matches!(
            posts.latest_published().await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn published_listing_filters_and_limits() {
        let (posts, _, _) = services();
        posts.create(published_input("A", "Tech")).await.unwrap();
        posts.create(published_input("B", "Life")).await.unwrap();
        posts.create(published_input("C", "Tech")).await.unwrap();
        posts.create(draft_input("D")).await.unwrap();

        let all = posts.published(None, None).await.unwrap();
        assert_eq!(all.len(), 3);
        // Newest first.
        assert_eq!(all[0].title, "C");

        let tech = posts.published(Some("Tech"), None).await.unwrap();
        assert_eq!(tech.len(), 2);
        assert!(tech.iter().all(|p| p.category.as_deref() == Some("Tech")));

        let limited = posts.published(None, Some(2)).await.unwrap();
        assert_eq!(limited.len(), 2);
    }

    #[tokio::test]
    async fn admin_listing_includes_drafts() {
        let (posts, _, _) = services();
        posts.create(published_input("A", "Tech")).await.unwrap();
        posts.create(draft_input("B")).await.unwrap();

        let all = posts.list(None, None).await.unwrap();
        assert_eq!(all.len(), 2);

        let drafts = posts.list(Some("draft"), None).await.unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title, "B");
    }

    #[tokio::test]
    async fn duplicate_category_is_a_conflict() {
        let (_, categories, _) = services();
        categories.create("Tech", None).await.unwrap();

        assert!(matches!(
            categories.create(" Tech ", None).await,
            Err(DomainError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn blank_category_name_is_rejected() {
        let (_, categories, _) = services();
        assert!(matches!(
            categories.create("   ", None).await,
            Err(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn explicit_category_starts_at_zero_and_keeps_its_description() {
        let (posts, categories, store) = services();
        categories
            .create("Tech", Some("All things tech".to_string()))
            .await
            .unwrap();
        assert_eq!(count_of(&store, "Tech").await, Some(0));

        posts.create(published_input("First", "Tech")).await.unwrap();

        let category = CategoryStore::get(store.as_ref(), "Tech")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(category.post_count, 1);
        assert_eq!(category.description.as_deref(), Some("All things tech"));
    }

    #[tokio::test]
    async fn delete_missing_category_is_not_found() {
        let (_, categories, _) = services();
        assert!(matches!(
            categories.delete("Nope").await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn cleanup_removes_only_invalid_names() {
        let (_, categories, store) = services();
        categories.create("Tech", None).await.unwrap();
        categories.create("Life", None).await.unwrap();
        // An invalid record produced by a defect elsewhere.
        CategoryStore::put(
            store.as_ref(),
            Category {
                name: "  ".to_string(),
                description: None,
                post_count: 3,
            },
        )
        .await
        .unwrap();

        let removed = categories.cleanup().await.unwrap();
        assert_eq!(removed, vec!["  ".to_string()]);

        let remaining = categories.list(true).await.unwrap();
        assert_eq!(remaining.len(), 2);
    }

    #[tokio::test]
    async fn public_category_listing_hides_invalid_names() {
        let (_, categories, store) = services();
        categories.create("Tech", None).await.unwrap();
        CategoryStore::put(
            store.as_ref(),
            Category {
                name: " ".to_string(),
                description: None,
                post_count: 0,
            },
        )
        .await
        .unwrap();

        assert_eq!(categories.list(false).await.unwrap().len(), 1);
        assert_eq!(categories.list(true).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn store_roundtrips_posts() {
        let store = MemoryStore::new();
        let now = Utc::now();
        let post = Post {
            id: Uuid::now_v7(),
            title: "T".to_string(),
            slug: "t".to_string(),
            excerpt: "e".to_string(),
            category: None,
            status: PostStatus::Draft,
            content_raw: "{}".to_string(),
            content_html: "<p>t</p>".to_string(),
            created_at: now,
            updated_at: now,
            published_at: None,
        };

        PostStore::put(&store, post.clone()).await.unwrap();
        let loaded = PostStore::get(&store, post.id).await.unwrap().unwrap();
        assert_eq!(loaded.title, "T");

        PostStore::delete(&store, post.id).await.unwrap();
        assert!(PostStore::get(&store, post.id).await.unwrap().is_none());
    }
}
