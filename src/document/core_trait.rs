//! Core Document Trait - the accessor protocol the binding engine requires
//!
//! The engine never owns documents; it reads and writes relation state
//! through this narrow contract. Attribute names are supplied by
//! association metadata, not fixed identifiers.

use crate::error::DocumentResult;

use super::identity::DocumentId;
use super::key_list::KeyList;

/// Capability contract for documents participating in associations
pub trait Document {
    /// Model type identifier, used for registry lookups
    fn model_name(&self) -> &str;

    /// Value of the default identity key
    fn identifier(&self) -> DocumentId;

    /// Value of a custom primary-key attribute, as an identifier
    ///
    /// A missing attribute or a value that cannot serve as an identifier
    /// is an error, propagated unchanged to the caller.
    fn key(&self, attribute: &str) -> DocumentResult<DocumentId>;

    /// Foreign-key list stored under `attribute`
    ///
    /// Returns None when the attribute is absent or uninitialized, which
    /// is distinct from present-and-empty.
    fn keys(&self, attribute: &str) -> Option<&KeyList>;

    /// Replace the foreign-key list stored under `attribute`
    ///
    /// All list mutation goes through this setter so any computed form of
    /// the attribute is refreshed.
    fn set_keys(&mut self, attribute: &str, keys: KeyList);

    /// Drop any memoized query criteria derived from `relation`
    fn reset_relation_criteria(&mut self, relation: &str);

    /// Mark `attribute` as requiring a forced write on next persist
    fn force_sync(&mut self, attribute: &str);

    /// Whether `attribute` is marked for a forced write
    fn requires_force_sync(&self, attribute: &str) -> bool;
}
