//! Typed field values and documents.
//!
//! A [`Document`] is what one element of an ingestion request looks like:
//!
//! ```json
//! { "id": "doc_7", "fields": { "title": "Smart Widget 7", "price": 12.5, ... } }
//! ```

use crate::schema::IndexDescriptor;
use crate::types::FieldType;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// `strftime` format for date values: microsecond precision with a literal `Z`.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// A single field value, tagged with the field type it was produced for.
///
/// Serializes to the plain JSON form the service expects: strings for
/// `text`/`string`, numbers for `i64`/`f64`, formatted strings for `date`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Full-text value
    Text(String),

    /// Keyword value
    String(String),

    /// Integer value
    I64(i64),

    /// Floating point value
    F64(f64),

    /// UTC timestamp, rendered with [`DATE_FORMAT`]
    Date(DateTime<Utc>),
}

impl FieldValue {
    /// The field type this value conforms to.
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Text(_) => FieldType::Text,
            Self::String(_) => FieldType::String,
            Self::I64(_) => FieldType::I64,
            Self::F64(_) => FieldType::F64,
            Self::Date(_) => FieldType::Date,
        }
    }

    /// String content of a `text` or `string` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric content of an `f64` value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F64(v) => Some(*v),
            _ => None,
        }
    }

    /// Timestamp content of a `date` value.
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Date(dt) => Some(dt),
            _ => None,
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) | Self::String(s) => serializer.serialize_str(s),
            Self::I64(v) => serializer.serialize_i64(*v),
            Self::F64(v) => serializer.serialize_f64(*v),
            Self::Date(dt) => serializer.collect_str(&dt.format(DATE_FORMAT)),
        }
    }
}

/// A document submitted for ingestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// Document identifier, unique within a run
    pub id: String,

    /// Field values keyed by field name
    pub fields: BTreeMap<String, FieldValue>,
}

impl Document {
    /// Create an empty document with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a field value (builder style).
    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Get a field value by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Whether every descriptor field is present with a value of the declared type
    /// and no undeclared field is present.
    pub fn conforms_to(&self, descriptor: &IndexDescriptor) -> bool {
        self.fields.len() == descriptor.fields.len()
            && descriptor.fields.iter().all(|field| {
                self.get_field(&field.name)
                    .is_some_and(|value| value.field_type() == field.field_type)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        CATEGORY_FIELD, CREATED_AT_FIELD, DESCRIPTION_FIELD, PRICE_FIELD, TITLE_FIELD,
    };
    use chrono::TimeZone;
    use serde_json::json;

    fn catalog_document() -> Document {
        let created_at = Utc
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .unwrap()
            .checked_add_signed(chrono::Duration::microseconds(123_456))
            .unwrap();

        Document::new("doc_0")
            .with_field(TITLE_FIELD, FieldValue::Text("Smart Widget 0".into()))
            .with_field(DESCRIPTION_FIELD, FieldValue::Text("A widget".into()))
            .with_field(CATEGORY_FIELD, FieldValue::String("Office".into()))
            .with_field(PRICE_FIELD, FieldValue::F64(19.99))
            .with_field(CREATED_AT_FIELD, FieldValue::Date(created_at))
    }

    #[test]
    fn test_document_wire_format() {
        let value = serde_json::to_value(catalog_document()).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "doc_0",
                "fields": {
                    "title": "Smart Widget 0",
                    "description": "A widget",
                    "category": "Office",
                    "price": 19.99,
                    "created_at": "2024-03-09T14:05:07.123456Z"
                }
            })
        );
    }

    #[test]
    fn test_date_format_pads_microseconds() {
        let dt = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();
        let value = serde_json::to_value(FieldValue::Date(dt)).unwrap();
        assert_eq!(value, json!("2023-01-02T03:04:05.000000Z"));
    }

    #[test]
    fn test_conforms_to_catalog() {
        let descriptor = IndexDescriptor::product_catalog("products");
        let document = catalog_document();
        assert!(document.conforms_to(&descriptor));

        // Wrong type for price
        let wrong_type = catalog_document().with_field(PRICE_FIELD, FieldValue::I64(19));
        assert!(!wrong_type.conforms_to(&descriptor));

        // Extra undeclared field
        let extra = catalog_document().with_field("color", FieldValue::String("red".into()));
        assert!(!extra.conforms_to(&descriptor));

        // Missing field
        let mut missing = catalog_document();
        missing.fields.remove(CATEGORY_FIELD);
        assert!(!missing.conforms_to(&descriptor));
    }

    #[test]
    fn test_accessors() {
        let document = catalog_document();
        assert_eq!(
            document.get_field(TITLE_FIELD).and_then(FieldValue::as_str),
            Some("Smart Widget 0")
        );
        assert_eq!(
            document.get_field(PRICE_FIELD).and_then(FieldValue::as_f64),
            Some(19.99)
        );
        assert!(document
            .get_field(CREATED_AT_FIELD)
            .and_then(FieldValue::as_date)
            .is_some());
        assert_eq!(
            document.get_field(PRICE_FIELD).and_then(FieldValue::as_str),
            None
        );
    }
}
