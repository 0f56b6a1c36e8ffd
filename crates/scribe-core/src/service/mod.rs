//! Services - orchestration over the store ports.
//!
//! `PostService` is the consistency engine: every post lifecycle
//! transition flows through it so the denormalized category counters
//! stay in step with the posts that carry them. `CategoryService` covers
//! explicit category administration. Public reads bypass neither - the
//! query surface lives here too, but applies visibility filtering only.

mod categories;
mod posts;

pub use categories::CategoryService;
pub use posts::{
    ADMIN_LIST_DEFAULT, ADMIN_LIST_MAX, NewPost, PostPatch, PostService, PUBLIC_LIST_DEFAULT,
    PUBLIC_LIST_MAX,
};
