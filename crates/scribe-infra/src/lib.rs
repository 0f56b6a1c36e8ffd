//! # Scribe Infrastructure
//!
//! Concrete implementations of the ports defined in `scribe-core`:
//! the in-memory single-table store and the static admin-token
//! verifier.

pub mod auth;
pub mod store;

pub use auth::StaticTokenVerifier;
pub use store::MemoryStore;
