//! Association Metadata - declaration of many-to-many document relations
//!
//! One `ManyToMany` value describes one direction of the relation. The
//! inverse direction is a separate declaration on the related model; the
//! registry links the two at declaration time so the binding engine
//! never derives names at mutation time.

use serde::{Deserialize, Serialize};

use crate::error::{DocumentError, DocumentResult};

use super::conventions;

/// Metadata for one direction of a many-to-many document association
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManyToMany {
    /// Relation name on the declaring model (field name, e.g. `preferences`)
    pub name: String,

    /// Type identifier of the declaring model
    pub model: String,

    /// Type identifier of the related model
    pub related_model: String,

    /// Attribute on the declaring model holding related identifiers
    pub foreign_key: String,

    /// Attribute on the related model holding declaring-side identifiers
    pub inverse_foreign_key: String,

    /// Attribute on the related model stored in `foreign_key`
    ///
    /// None means the related model's default identity key.
    pub primary_key: Option<String>,

    /// Attribute on the declaring model stored in `inverse_foreign_key`
    ///
    /// None means the declaring model's default identity key. Usually
    /// filled in by inverse resolution rather than declared directly.
    pub inverse_primary_key: Option<String>,

    /// Relation name on the related model pointing back at this one
    pub inverse: Option<String>,
}

impl ManyToMany {
    /// Create association metadata with conventional foreign-key names
    pub fn new(model: &str, name: &str, related_model: &str) -> Self {
        Self {
            name: name.to_string(),
            model: model.to_string(),
            related_model: related_model.to_string(),
            foreign_key: conventions::foreign_key_for(related_model),
            inverse_foreign_key: conventions::foreign_key_for(model),
            primary_key: None,
            inverse_primary_key: None,
            inverse: None,
        }
    }

    /// Create association metadata with a conventional relation name too
    pub fn between(model: &str, related_model: &str) -> Self {
        let name = conventions::relation_name_for(related_model);
        Self::new(model, &name, related_model)
    }

    /// Set the declaring-side foreign-key attribute
    pub fn with_foreign_key(mut self, foreign_key: &str) -> Self {
        self.foreign_key = foreign_key.to_string();
        self
    }

    /// Set the related-side foreign-key attribute
    pub fn with_inverse_foreign_key(mut self, inverse_foreign_key: &str) -> Self {
        self.inverse_foreign_key = inverse_foreign_key.to_string();
        self
    }

    /// Store a custom attribute of the related model instead of its identity
    pub fn with_primary_key(mut self, primary_key: &str) -> Self {
        self.primary_key = Some(primary_key.to_string());
        self
    }

    /// Store a custom attribute of the declaring model on the related side
    pub fn with_inverse_primary_key(mut self, inverse_primary_key: &str) -> Self {
        self.inverse_primary_key = Some(inverse_primary_key.to_string());
        self
    }

    /// Name the inverse relation explicitly
    pub fn with_inverse(mut self, inverse: &str) -> Self {
        self.inverse = Some(inverse.to_string());
        self
    }

    /// Validate the metadata for consistency
    pub fn validate(&self) -> DocumentResult<()> {
        if self.name.is_empty() {
            return Err(DocumentError::Configuration(
                "Association name cannot be empty".to_string(),
            ));
        }

        if self.model.is_empty() || self.related_model.is_empty() {
            return Err(DocumentError::Configuration(format!(
                "Association '{}' must name both models",
                self.name
            )));
        }

        if self.foreign_key.is_empty() || self.inverse_foreign_key.is_empty() {
            return Err(DocumentError::Configuration(format!(
                "Association '{}' must name both foreign-key attributes",
                self.name
            )));
        }

        if self.foreign_key == self.inverse_foreign_key {
            return Err(DocumentError::Configuration(format!(
                "Association '{}' declares the same attribute '{}' for both directions",
                self.name, self.foreign_key
            )));
        }

        if self.primary_key.as_deref() == Some("") || self.inverse_primary_key.as_deref() == Some("")
        {
            return Err(DocumentError::Configuration(format!(
                "Association '{}' declares an empty primary key",
                self.name
            )));
        }

        Ok(())
    }
}
