//! Dynamic Document - in-memory attribute-map document
//!
//! The shape a persistence layer hydrates from a document store: scalar
//! attributes as JSON values, foreign-key lists as typed containers, a
//! synced-flag set, and a memoized criteria cache per relation.

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::associations::{Criteria, CriteriaCache, ManyToMany};
use crate::error::{DocumentError, DocumentResult};

use super::core_trait::Document;
use super::identity::{DocumentId, IDENTITY};
use super::key_list::KeyList;

/// In-memory document backed by an attribute map
#[derive(Debug, Clone)]
pub struct DynamicDocument {
    /// Model type identifier
    model: String,

    /// Default identity key
    id: DocumentId,

    /// Scalar attributes by name
    attributes: HashMap<String, Value>,

    /// Foreign-key lists by attribute name; a missing entry models an
    /// attribute that was never loaded or initialized
    key_lists: HashMap<String, KeyList>,

    /// Attributes requiring a forced write on next persist
    synced: HashSet<String>,

    /// Memoized relation criteria
    criteria: CriteriaCache,
}

impl DynamicDocument {
    /// Create a document with an identity and no attributes
    pub fn new(model: impl Into<String>, id: impl Into<DocumentId>) -> Self {
        Self {
            model: model.into(),
            id: id.into(),
            attributes: HashMap::new(),
            key_lists: HashMap::new(),
            synced: HashSet::new(),
            criteria: CriteriaCache::new(),
        }
    }

    /// Set a scalar attribute, builder style
    pub fn with_attribute(mut self, name: &str, value: Value) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Initialize a foreign-key attribute with an empty list, builder style
    pub fn with_keys(mut self, attribute: &str) -> Self {
        self.initialize_keys(attribute);
        self
    }

    /// Read a scalar attribute
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Write a scalar attribute
    pub fn set_attribute(&mut self, name: &str, value: Value) {
        self.attributes.insert(name.to_string(), value);
    }

    /// Initialize a foreign-key attribute with an empty list
    ///
    /// An initialized-but-empty list participates in binding; an
    /// uninitialized attribute is skipped.
    pub fn initialize_keys(&mut self, attribute: &str) {
        self.key_lists
            .entry(attribute.to_string())
            .or_insert_with(KeyList::new);
    }

    /// Memoized query criteria for a relation declared on this model
    ///
    /// Built from the relation's current key list on first access and
    /// reused until `reset_relation_criteria` invalidates it.
    pub fn relation_criteria(&mut self, association: &ManyToMany) -> Criteria {
        if let Some(cached) = self.criteria.get(&association.name) {
            return cached.clone();
        }

        let keys = self
            .key_lists
            .get(&association.foreign_key)
            .cloned()
            .unwrap_or_default();
        let field = association.primary_key.as_deref().unwrap_or(IDENTITY);
        let built = Criteria::in_keys(field, &keys);

        self.criteria.store(&association.name, built.clone());
        built
    }
}

impl Document for DynamicDocument {
    fn model_name(&self) -> &str {
        &self.model
    }

    fn identifier(&self) -> DocumentId {
        self.id.clone()
    }

    fn key(&self, attribute: &str) -> DocumentResult<DocumentId> {
        if attribute == IDENTITY {
            return Ok(self.id.clone());
        }

        let value = self.attributes.get(attribute).ok_or_else(|| {
            DocumentError::Attribute(format!(
                "document '{}' has no attribute '{}'",
                self.model, attribute
            ))
        })?;

        DocumentId::try_from(value)
    }

    fn keys(&self, attribute: &str) -> Option<&KeyList> {
        self.key_lists.get(attribute)
    }

    fn set_keys(&mut self, attribute: &str, keys: KeyList) {
        self.key_lists.insert(attribute.to_string(), keys);
    }

    fn reset_relation_criteria(&mut self, relation: &str) {
        self.criteria.reset(relation);
    }

    fn force_sync(&mut self, attribute: &str) {
        self.synced.insert(attribute.to_string());
    }

    fn requires_force_sync(&self, attribute: &str) -> bool {
        self.synced.contains(attribute)
    }
}
