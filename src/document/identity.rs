//! Document Identity - identifier values stored in foreign-key lists
//!
//! Supports integer, UUID, and string keys with display formatting and
//! conversion from raw attribute values. A relation configured with a
//! custom primary key stores whatever attribute value that key resolves
//! to, so identifiers are not limited to the default `_id`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::{DocumentError, DocumentResult};

/// Attribute name of the default identity key.
pub const IDENTITY: &str = "_id";

/// Identifier values supported by document key lists
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentId {
    /// Integer identifier
    Integer(i64),
    /// UUID identifier
    Uuid(Uuid),
    /// String key (custom primary keys, e.g. a username)
    Key(String),
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentId::Integer(id) => write!(f, "{}", id),
            DocumentId::Uuid(id) => write!(f, "{}", id),
            DocumentId::Key(id) => write!(f, "{}", id),
        }
    }
}

impl DocumentId {
    /// Extract as i64 if this is an Integer identifier
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DocumentId::Integer(id) => Some(*id),
            _ => None,
        }
    }

    /// Extract as UUID if this is a UUID identifier
    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            DocumentId::Uuid(id) => Some(*id),
            _ => None,
        }
    }

    /// Extract as string slice if this is a string key
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DocumentId::Key(id) => Some(id),
            _ => None,
        }
    }

    /// Check if this is a valid (non-default) identifier
    pub fn is_valid(&self) -> bool {
        match self {
            DocumentId::Integer(0) => false,
            DocumentId::Integer(_) => true,
            DocumentId::Uuid(uuid) => !uuid.is_nil(),
            DocumentId::Key(key) => !key.is_empty(),
        }
    }

    /// Render as a JSON value for selector construction
    pub fn to_value(&self) -> Value {
        match self {
            DocumentId::Integer(id) => Value::from(*id),
            DocumentId::Uuid(id) => Value::String(id.to_string()),
            DocumentId::Key(id) => Value::String(id.clone()),
        }
    }
}

impl From<i64> for DocumentId {
    fn from(id: i64) -> Self {
        DocumentId::Integer(id)
    }
}

impl From<Uuid> for DocumentId {
    fn from(id: Uuid) -> Self {
        DocumentId::Uuid(id)
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        DocumentId::Key(id)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        DocumentId::Key(id.to_string())
    }
}

impl TryFrom<&Value> for DocumentId {
    type Error = DocumentError;

    fn try_from(value: &Value) -> DocumentResult<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(DocumentId::Integer).ok_or_else(|| {
                DocumentError::InvalidKey(format!("numeric key out of range: {}", n))
            }),
            Value::String(s) => Ok(DocumentId::Key(s.clone())),
            other => Err(DocumentError::InvalidKey(format!(
                "cannot use {} as a document key",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_id_display() {
        assert_eq!(format!("{}", DocumentId::Integer(123)), "123");

        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(
            format!("{}", DocumentId::Uuid(uuid)),
            "550e8400-e29b-41d4-a716-446655440000"
        );

        assert_eq!(format!("{}", DocumentId::from("alice")), "alice");
    }

    #[test]
    fn test_document_id_validation() {
        assert!(!DocumentId::Integer(0).is_valid());
        assert!(DocumentId::Integer(1).is_valid());

        assert!(!DocumentId::Uuid(Uuid::nil()).is_valid());
        assert!(DocumentId::Uuid(Uuid::new_v4()).is_valid());

        assert!(!DocumentId::Key(String::new()).is_valid());
        assert!(DocumentId::from("alice").is_valid());
    }

    #[test]
    fn test_conversion_from_attribute_values() {
        assert_eq!(
            DocumentId::try_from(&json!(42)).unwrap(),
            DocumentId::Integer(42)
        );
        assert_eq!(
            DocumentId::try_from(&json!("alice")).unwrap(),
            DocumentId::from("alice")
        );

        let err = DocumentId::try_from(&json!(true)).unwrap_err();
        assert!(matches!(err, DocumentError::InvalidKey(_)));

        let err = DocumentId::try_from(&json!(1.5)).unwrap_err();
        assert!(matches!(err, DocumentError::InvalidKey(_)));
    }

    #[test]
    fn test_to_value_round_trip() {
        assert_eq!(DocumentId::Integer(7).to_value(), json!(7));
        assert_eq!(DocumentId::from("alice").to_value(), json!("alice"));
    }
}
