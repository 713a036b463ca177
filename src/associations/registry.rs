//! Association Registry - declaration-time metadata storage and lookup
//!
//! Thread-safe store of every declared many-to-many association, keyed by
//! model and relation name. Inverse resolution happens here, against
//! registered metadata, so the binding engine never has to re-derive the
//! inverse from a runtime type name.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::document::Document;
use crate::error::{AssociationError, DocumentError, DocumentResult};

use super::metadata::ManyToMany;

/// Thread-safe association registry
#[derive(Debug, Clone)]
pub struct AssociationRegistry {
    /// Map of model name -> relation name -> metadata
    associations: Arc<DashMap<String, HashMap<String, ManyToMany>>>,
}

impl Default for AssociationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AssociationRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            associations: Arc::new(DashMap::new()),
        }
    }

    /// Register an association declaration
    pub fn register(&self, metadata: ManyToMany) -> DocumentResult<()> {
        metadata.validate()?;

        let model = metadata.model.clone();
        let name = metadata.name.clone();

        self.associations
            .entry(model.clone())
            .or_insert_with(HashMap::new)
            .insert(name.clone(), metadata);

        debug!("Registered association '{}.{}'", model, name);
        Ok(())
    }

    /// Get association metadata by model and relation name
    pub fn get(&self, model: &str, name: &str) -> Option<ManyToMany> {
        self.associations.get(model)?.get(name).cloned()
    }

    /// Get all associations declared on a model
    pub fn get_all_for_model(&self, model: &str) -> Option<HashMap<String, ManyToMany>> {
        self.associations.get(model).map(|entry| entry.clone())
    }

    /// Check if an association is registered
    pub fn has_association(&self, model: &str, name: &str) -> bool {
        self.associations
            .get(model)
            .map(|relations| relations.contains_key(name))
            .unwrap_or(false)
    }

    /// Get all relation names declared on a model
    pub fn association_names(&self, model: &str) -> Vec<String> {
        self.associations
            .get(model)
            .map(|relations| relations.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Relations known for a document's model
    pub fn relations_of(&self, document: &impl Document) -> HashMap<String, ManyToMany> {
        self.get_all_for_model(document.model_name())
            .unwrap_or_default()
    }

    /// Resolve the inverse direction of a registered association
    ///
    /// Copies the back-reference's name and primary key into the forward
    /// metadata and persists the result, so repeated lookups are already
    /// linked. An explicitly declared inverse name always wins; without
    /// one, a single back-reference on the related model is linked
    /// automatically and multiple back-references are an error.
    pub fn resolve_inverse(&self, model: &str, name: &str) -> DocumentResult<ManyToMany> {
        let mut metadata = self
            .get(model, name)
            .ok_or_else(|| AssociationError::NotFound(format!("{}.{}", model, name)))?;

        let related = self
            .get_all_for_model(&metadata.related_model)
            .unwrap_or_default();

        let back = match &metadata.inverse {
            Some(inverse_name) => related.get(inverse_name.as_str()),
            None => {
                let candidates: Vec<&ManyToMany> = related
                    .values()
                    .filter(|assoc| assoc.related_model == metadata.model)
                    .collect();

                match candidates.as_slice() {
                    [] => None,
                    [single] => Some(*single),
                    many => {
                        let mut names: Vec<String> =
                            many.iter().map(|assoc| assoc.name.clone()).collect();
                        names.sort();
                        return Err(AssociationError::AmbiguousInverse {
                            model: metadata.model.clone(),
                            relation: metadata.name.clone(),
                            candidates: names,
                        }
                        .into());
                    }
                }
            }
        };

        if let Some(back) = back {
            metadata.inverse = Some(back.name.clone());
            if metadata.inverse_primary_key.is_none() {
                metadata.inverse_primary_key = back.primary_key.clone();
            }

            if let Some(mut relations) = self.associations.get_mut(model) {
                relations.insert(name.to_string(), metadata.clone());
            }
            debug!(
                "Resolved inverse of '{}.{}' to '{}.{}'",
                model, name, metadata.related_model, back.name
            );
        }

        Ok(metadata)
    }

    /// Validate every registered association
    pub fn validate_all(&self) -> DocumentResult<()> {
        for entry in self.associations.iter() {
            for (name, metadata) in entry.value() {
                metadata.validate().map_err(|e| {
                    DocumentError::Configuration(format!(
                        "Validation failed for association '{}.{}': {}",
                        entry.key(),
                        name,
                        e
                    ))
                })?;
            }
        }
        Ok(())
    }

    /// Clear all registered associations
    pub fn clear(&self) {
        self.associations.clear();
    }
}

/// Global registry instance for the application
static GLOBAL_REGISTRY: Lazy<AssociationRegistry> = Lazy::new(AssociationRegistry::new);

/// Get the global association registry
pub fn global_registry() -> &'static AssociationRegistry {
    &GLOBAL_REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DynamicDocument;

    fn person_preferences() -> ManyToMany {
        ManyToMany::new("person", "preferences", "preference")
    }

    fn preference_people() -> ManyToMany {
        ManyToMany::new("preference", "people", "person").with_primary_key("username")
    }

    #[test]
    fn test_registration_and_lookup() {
        let registry = AssociationRegistry::new();

        registry.register(person_preferences()).unwrap();

        assert!(registry.has_association("person", "preferences"));
        assert_eq!(
            registry.get("person", "preferences"),
            Some(person_preferences())
        );
        assert!(registry.get("person", "nonexistent").is_none());
        assert!(!registry.has_association("preference", "people"));
    }

    #[test]
    fn test_registration_rejects_invalid_metadata() {
        let registry = AssociationRegistry::new();
        let invalid = ManyToMany::new("person", "", "preference");

        assert!(registry.register(invalid).is_err());
        assert!(registry.association_names("person").is_empty());
    }

    #[test]
    fn test_association_names() {
        let registry = AssociationRegistry::new();
        registry.register(person_preferences()).unwrap();
        registry
            .register(ManyToMany::between("person", "tag"))
            .unwrap();

        let mut names = registry.association_names("person");
        names.sort();
        assert_eq!(names, vec!["preferences", "tags"]);
    }

    #[test]
    fn test_relations_of_document() {
        let registry = AssociationRegistry::new();
        registry.register(person_preferences()).unwrap();

        let doc = DynamicDocument::new("person", 1);
        let relations = registry.relations_of(&doc);
        assert_eq!(relations.len(), 1);
        assert!(relations.contains_key("preferences"));

        let other = DynamicDocument::new("preference", 2);
        assert!(registry.relations_of(&other).is_empty());
    }

    #[test]
    fn test_resolve_inverse_links_both_names_and_keys() {
        let registry = AssociationRegistry::new();
        registry.register(person_preferences()).unwrap();
        registry.register(preference_people()).unwrap();

        let resolved = registry.resolve_inverse("person", "preferences").unwrap();
        assert_eq!(resolved.inverse, Some("people".to_string()));
        assert_eq!(resolved.inverse_primary_key, Some("username".to_string()));

        // The resolution is persisted for later lookups.
        let stored = registry.get("person", "preferences").unwrap();
        assert_eq!(stored.inverse, Some("people".to_string()));
    }

    #[test]
    fn test_resolve_inverse_without_back_reference() {
        let registry = AssociationRegistry::new();
        registry.register(person_preferences()).unwrap();

        let resolved = registry.resolve_inverse("person", "preferences").unwrap();
        assert_eq!(resolved.inverse, None);
        assert_eq!(resolved.inverse_primary_key, None);
    }

    #[test]
    fn test_resolve_inverse_ambiguity_is_an_error() {
        let registry = AssociationRegistry::new();
        registry.register(person_preferences()).unwrap();
        registry.register(preference_people()).unwrap();
        registry
            .register(
                ManyToMany::new("preference", "owners", "person")
                    .with_inverse_foreign_key("owner_ids"),
            )
            .unwrap();

        let err = registry
            .resolve_inverse("person", "preferences")
            .unwrap_err();
        assert!(matches!(err, DocumentError::Association(_)));
    }

    #[test]
    fn test_explicit_inverse_wins_over_ambiguity() {
        let registry = AssociationRegistry::new();
        registry
            .register(person_preferences().with_inverse("people"))
            .unwrap();
        registry.register(preference_people()).unwrap();
        registry
            .register(
                ManyToMany::new("preference", "owners", "person")
                    .with_inverse_foreign_key("owner_ids"),
            )
            .unwrap();

        let resolved = registry.resolve_inverse("person", "preferences").unwrap();
        assert_eq!(resolved.inverse, Some("people".to_string()));
        assert_eq!(resolved.inverse_primary_key, Some("username".to_string()));
    }

    #[test]
    fn test_resolve_inverse_unknown_association() {
        let registry = AssociationRegistry::new();
        let err = registry.resolve_inverse("person", "preferences").unwrap_err();
        assert!(matches!(err, DocumentError::Association(_)));
    }

    #[test]
    fn test_validate_all_and_clear() {
        let registry = AssociationRegistry::new();
        registry.register(person_preferences()).unwrap();
        assert!(registry.validate_all().is_ok());

        registry.clear();
        assert!(!registry.has_association("person", "preferences"));
    }

    #[test]
    fn test_global_registry_is_shared() {
        let unique = ManyToMany::new("registry_test_model", "widgets", "widget");
        global_registry().register(unique).unwrap();

        assert!(global_registry().has_association("registry_test_model", "widgets"));
    }
}
