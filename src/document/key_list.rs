//! Foreign-Key Containers - ordered identifier lists held on documents
//!
//! A many-to-many relation stores the other side's identifiers in an
//! embedded list on each document. The container preserves insertion
//! order and removes a single occurrence at a time, matching how the
//! persistence layer diffs and writes the attribute.

use serde::{Deserialize, Serialize};

use super::identity::DocumentId;

/// Ordered list of document identifiers backing a foreign-key attribute
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyList(Vec<DocumentId>);

impl KeyList {
    /// Create an empty key list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Check whether the list contains the given identifier
    pub fn contains(&self, key: &DocumentId) -> bool {
        self.0.contains(key)
    }

    /// Append an identifier to the end of the list
    pub fn push(&mut self, key: DocumentId) {
        self.0.push(key);
    }

    /// Remove at most one occurrence of the given identifier
    ///
    /// Returns true if an element was removed. Removing an identifier
    /// that is not present is a silent no-op.
    pub fn remove_one(&mut self, key: &DocumentId) -> bool {
        match self.0.iter().position(|k| k == key) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of occurrences of the given identifier
    pub fn occurrences(&self, key: &DocumentId) -> usize {
        self.0.iter().filter(|k| *k == key).count()
    }

    /// Number of identifiers in the list
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the identifiers in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, DocumentId> {
        self.0.iter()
    }
}

impl From<Vec<DocumentId>> for KeyList {
    fn from(keys: Vec<DocumentId>) -> Self {
        Self(keys)
    }
}

impl FromIterator<DocumentId> for KeyList {
    fn from_iter<I: IntoIterator<Item = DocumentId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a KeyList {
    type Item = &'a DocumentId;
    type IntoIter = std::slice::Iter<'a, DocumentId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
