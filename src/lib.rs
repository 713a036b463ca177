//! # vellum-odm: Document Association Layer
//!
//! Bidirectional binding for many-to-many document associations: when two
//! documents are associated or dissociated, both sides' embedded
//! foreign-key lists are kept consistent without the caller updating each
//! end by hand.
//!
//! The crate provides association metadata with declaration-time inverse
//! resolution, a thread-safe registry, memoized relation criteria with
//! explicit invalidation, and the binding engine itself, which reports
//! the attributes requiring a forced write after every operation.

pub mod associations;
pub mod document;
pub mod error;

// Re-export core traits and types
pub use associations::*;
pub use document::*;
pub use error::*;
