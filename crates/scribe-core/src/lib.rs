//! # Scribe Core
//!
//! The domain layer of the Scribe blog backend.
//! This crate contains pure business logic with zero infrastructure
//! dependencies: the post/category entities, the content pipeline
//! (sanitizer, excerpts, slugs), the store ports, and the services that
//! keep the denormalized category counters in step with post lifecycle
//! transitions.

pub mod content;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
