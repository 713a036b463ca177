//! Relation Criteria - memoized query selectors derived from key lists
//!
//! A relation's query criteria is a pure function of its current key
//! list. Documents memoize the built criteria per relation name and the
//! binding engine invalidates the entry whenever membership changes, so
//! the next access recomputes from the new key set.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::document::{DocumentId, KeyList};

/// A query selector over a relation's current key list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    selector: Value,
}

impl Criteria {
    /// Build an inclusion selector matching documents whose `field` is in `keys`
    pub fn in_keys(field: &str, keys: &KeyList) -> Self {
        let ids: Vec<Value> = keys.iter().map(DocumentId::to_value).collect();
        Self {
            selector: json!({ field: { "$in": ids } }),
        }
    }

    /// The selector document
    pub fn selector(&self) -> &Value {
        &self.selector
    }

    /// Whether the selector matches any key at all
    pub fn is_empty(&self) -> bool {
        self.selector
            .as_object()
            .and_then(|doc| doc.values().next())
            .and_then(|clause| clause.get("$in"))
            .and_then(Value::as_array)
            .map(Vec::is_empty)
            .unwrap_or(true)
    }
}

/// Per-document memoization of relation criteria
#[derive(Debug, Clone, Default)]
pub struct CriteriaCache {
    entries: HashMap<String, Criteria>,
}

impl CriteriaCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the memoized criteria for a relation, if any
    pub fn get(&self, relation: &str) -> Option<&Criteria> {
        self.entries.get(relation)
    }

    /// Memoize criteria for a relation
    pub fn store(&mut self, relation: &str, criteria: Criteria) {
        self.entries.insert(relation.to_string(), criteria);
    }

    /// Drop the memoized criteria for a relation
    ///
    /// Returns true if an entry was present. Resetting a relation that
    /// was never memoized is a no-op.
    pub fn reset(&mut self, relation: &str) -> bool {
        self.entries.remove(relation).is_some()
    }

    /// Drop every memoized entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
