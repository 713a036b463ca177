//! Many-to-Many Binding - bidirectional foreign-key synchronization
//!
//! When a document is appended to or removed from a many-to-many
//! relation, both sides' embedded key lists have to stay consistent.
//! The engine mutates the two documents through their accessor protocol,
//! invalidates memoized criteria on the changed side, and reports which
//! attributes now require a forced write.

use tracing::debug;

use crate::document::{Document, DocumentId};
use crate::error::DocumentResult;

use super::metadata::ManyToMany;

/// Attributes that require a forced write after a binding operation
///
/// Returned by every bind/unbind call, whether or not the key lists
/// actually changed: the persistence layer must treat both foreign-key
/// attributes as dirty even when the lists compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSet {
    /// Foreign-key attribute on the base document
    pub base_attribute: String,

    /// Foreign-key attribute on the bound document
    pub target_attribute: String,
}

impl SyncSet {
    /// Check whether an attribute is marked on either side
    pub fn marks(&self, attribute: &str) -> bool {
        self.base_attribute == attribute || self.target_attribute == attribute
    }

    /// Transfer the marks onto the two documents' synced-flag sets
    pub fn apply<B: Document, T: Document>(&self, base: &mut B, target: &mut T) {
        base.force_sync(&self.base_attribute);
        target.force_sync(&self.target_attribute);
    }
}

/// Binding engine for one direction of a many-to-many association
///
/// Borrows the base document (the side owning the relation proxy) and
/// the resolved association metadata; each call takes the document being
/// added or removed.
pub struct Binding<'a, B: Document> {
    base: &'a mut B,
    association: &'a ManyToMany,
}

impl<'a, B: Document> Binding<'a, B> {
    /// Create a binding for a base document and its association
    pub fn new(base: &'a mut B, association: &'a ManyToMany) -> Self {
        Self { base, association }
    }

    /// Bind a single document into the relation
    ///
    /// Appends the base's identifier to `doc`'s inverse key list unless
    /// already present, and invalidates `doc`'s memoized criteria for the
    /// inverse relation. An absent inverse list means the attribute was
    /// never loaded; the mutation is skipped and the list stays unset.
    /// The base's own forward list is the caller's to maintain.
    pub fn bind_one<T: Document>(&mut self, doc: &mut T) -> DocumentResult<SyncSet> {
        if let Some(inverse_keys) = doc.keys(&self.association.inverse_foreign_key) {
            let record_id = self.inverse_record_id()?;
            if !inverse_keys.contains(&record_id) {
                let mut updated = inverse_keys.clone();
                updated.push(record_id);
                doc.set_keys(&self.association.inverse_foreign_key, updated);
            }
            self.reset_inverse_criteria(doc);
        }

        debug!(
            "Bound document into '{}.{}'",
            self.association.model, self.association.name
        );
        Ok(self.sync_set())
    }

    /// Unbind a single document from the relation
    ///
    /// Removes one occurrence of `doc`'s identifier from the base's
    /// forward list and, when the inverse list exists, one occurrence of
    /// the base's identifier from it. Removing an identifier that is not
    /// present is a silent no-op.
    pub fn unbind_one<T: Document>(&mut self, doc: &mut T) -> DocumentResult<SyncSet> {
        let record_id = self.record_id(doc)?;
        if let Some(forward_keys) = self.base.keys(&self.association.foreign_key) {
            if forward_keys.contains(&record_id) {
                let mut updated = forward_keys.clone();
                updated.remove_one(&record_id);
                self.base.set_keys(&self.association.foreign_key, updated);
            }
        }

        if let Some(inverse_keys) = doc.keys(&self.association.inverse_foreign_key) {
            let inverse_id = self.inverse_record_id()?;
            if inverse_keys.contains(&inverse_id) {
                let mut updated = inverse_keys.clone();
                updated.remove_one(&inverse_id);
                doc.set_keys(&self.association.inverse_foreign_key, updated);
            }
            self.reset_inverse_criteria(doc);
        }

        debug!(
            "Unbound document from '{}.{}'",
            self.association.model, self.association.name
        );
        Ok(self.sync_set())
    }

    /// Identifier the base's forward list stores for `doc`
    fn record_id<T: Document>(&self, doc: &T) -> DocumentResult<DocumentId> {
        match &self.association.primary_key {
            Some(attribute) => doc.key(attribute),
            None => Ok(doc.identifier()),
        }
    }

    /// Identifier the inverse list stores for the base
    fn inverse_record_id(&self) -> DocumentResult<DocumentId> {
        match &self.association.inverse_primary_key {
            Some(attribute) => self.base.key(attribute),
            None => Ok(self.base.identifier()),
        }
    }

    fn reset_inverse_criteria<T: Document>(&self, doc: &mut T) {
        if let Some(inverse) = &self.association.inverse {
            doc.reset_relation_criteria(inverse);
        }
    }

    fn sync_set(&self) -> SyncSet {
        SyncSet {
            base_attribute: self.association.foreign_key.clone(),
            target_attribute: self.association.inverse_foreign_key.clone(),
        }
    }
}
