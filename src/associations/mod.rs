//! Associations Module - many-to-many metadata, registry, and binding

pub mod binding;
pub mod conventions;
pub mod criteria;
pub mod metadata;
pub mod registry;

// Re-export main types
pub use binding::*;
pub use criteria::*;
pub use metadata::*;
pub use registry::*;
