//! Field types understood by the search service.
//!
//! `FieldType` is the closed set of type names the loader puts into a
//! create-index request. The service accepts a few more; only these are used
//! by the fixed catalog schema, plus `i64` for completeness of the wire form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type of a single index field as named on the wire.
///
/// # Wire Format
///
/// Serialized as the lower-case type name in the `field_type` property:
/// ```json
/// { "name": "price", "field_type": "f64", "stored": true, "indexed": true }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Tokenized full-text field
    Text,

    /// Untokenized keyword field (exact match)
    String,

    /// 64-bit signed integer
    I64,

    /// 64-bit IEEE 754 floating point
    F64,

    /// ISO 8601 date-time
    Date,
}

impl FieldType {
    /// Wire name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::String => "string",
            Self::I64 => "i64",
            Self::F64 => "f64",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "string" => Ok(Self::String),
            "i64" => Ok(Self::I64),
            "f64" => Ok(Self::F64),
            "date" => Ok(Self::Date),
            other => Err(format!("Unknown field type: {other}")),
        }
    }
}
