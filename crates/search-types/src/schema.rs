//! Index schema definitions.
//!
//! ## Type Hierarchy
//!
//! - `FieldDefinition` - Single field with type and indexing flags
//! - `IndexDescriptor` - Named index with an ordered list of fields
//!
//! The loader works against one fixed schema, the product catalog returned by
//! [`IndexDescriptor::product_catalog`].

use crate::types::FieldType;
use serde::{Deserialize, Serialize};

/// Maximum length for index names accepted by the search service.
pub const MAX_INDEX_NAME_LENGTH: usize = 64;

/// Product catalog field names.
pub const TITLE_FIELD: &str = "title";
pub const DESCRIPTION_FIELD: &str = "description";
pub const CATEGORY_FIELD: &str = "category";
pub const PRICE_FIELD: &str = "price";
pub const CREATED_AT_FIELD: &str = "created_at";

// ============================================================================
// Error Types
// ============================================================================

/// Reasons an index name is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexNameError {
    /// Name is empty
    #[error("Index name cannot be empty")]
    Empty,

    /// Name exceeds [`MAX_INDEX_NAME_LENGTH`]
    #[error("Index name exceeds maximum length of {MAX_INDEX_NAME_LENGTH} characters")]
    TooLong,

    /// Name does not start with a letter or contains other characters
    #[error(
        "Index name must start with a letter and contain only alphanumeric characters, underscores, or hyphens: '{0}'"
    )]
    InvalidCharacters(String),
}

/// Check an index name against the service's naming rules.
pub fn validate_index_name(name: &str) -> Result<(), IndexNameError> {
    if name.is_empty() {
        return Err(IndexNameError::Empty);
    }

    if name.len() > MAX_INDEX_NAME_LENGTH {
        return Err(IndexNameError::TooLong);
    }

    let mut chars = name.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_valid = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if !starts_with_letter || !rest_valid {
        return Err(IndexNameError::InvalidCharacters(name.to_string()));
    }

    Ok(())
}

// ============================================================================
// Field and Index Definitions
// ============================================================================

/// Field definition as sent in a create-index request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name
    pub name: String,

    /// Field type
    pub field_type: FieldType,

    /// Whether the value is stored and returned with hits
    #[serde(default)]
    pub stored: bool,

    /// Whether the value is searchable
    #[serde(default)]
    pub indexed: bool,

    /// Hint for columnar (range/sort) access, passed through unmodified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fast: Option<bool>,
}

impl FieldDefinition {
    /// Create a stored and indexed field without a fast hint.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            stored: true,
            indexed: true,
            fast: None,
        }
    }

    /// Set the fast-field hint.
    pub fn with_fast(mut self, fast: bool) -> Self {
        self.fast = Some(fast);
        self
    }
}

/// A named index and its ordered field list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDescriptor {
    /// Index name (unique on the service)
    pub name: String,

    /// Field definitions in submission order
    pub fields: Vec<FieldDefinition>,
}

impl IndexDescriptor {
    /// Create a new index descriptor.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDefinition>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// The fixed product catalog schema used by the loader.
    ///
    /// | field | type | fast |
    /// |---|---|---|
    /// | title | text | |
    /// | description | text | |
    /// | category | string | |
    /// | price | f64 | |
    /// | created_at | date | yes |
    pub fn product_catalog(name: impl Into<String>) -> Self {
        Self::new(
            name,
            vec![
                FieldDefinition::new(TITLE_FIELD, FieldType::Text),
                FieldDefinition::new(DESCRIPTION_FIELD, FieldType::Text),
                FieldDefinition::new(CATEGORY_FIELD, FieldType::String),
                FieldDefinition::new(PRICE_FIELD, FieldType::F64),
                FieldDefinition::new(CREATED_AT_FIELD, FieldType::Date).with_fast(true),
            ],
        )
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get the type of a field by name.
    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        self.get_field(name).map(|f| f.field_type)
    }

    /// Get all field names in order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}
