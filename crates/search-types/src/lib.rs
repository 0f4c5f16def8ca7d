//! Core types for the search-populate loader.
//!
//! This crate provides the foundational types shared by the generator, the
//! HTTP client and the populator:
//!
//! - [`FieldType`] - Field type names accepted by the search service
//! - [`FieldDefinition`] / [`IndexDescriptor`] - Index schema sent on creation
//! - [`FieldValue`] / [`Document`] - Typed documents sent on ingestion
//!
//! # Architecture
//!
//! ```text
//! search-types (this crate)
//!    │
//!    ├─── loadtest-generator        (produces Documents)
//!    ├─── search-client             (serializes descriptors and Documents)
//!    └─── loadtest-populate-search  (provisions, uploads, reports)
//! ```
//!
//! # Example
//!
//! ```rust
//! use search_types::{FieldType, IndexDescriptor};
//!
//! let descriptor = IndexDescriptor::product_catalog("large_dataset");
//! assert_eq!(descriptor.fields.len(), 5);
//! assert_eq!(descriptor.field_type("price"), Some(FieldType::F64));
//! ```

pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use schema::{
    validate_index_name, FieldDefinition, IndexDescriptor, IndexNameError, CATEGORY_FIELD,
    CREATED_AT_FIELD, DESCRIPTION_FIELD, MAX_INDEX_NAME_LENGTH, PRICE_FIELD, TITLE_FIELD,
};
pub use types::FieldType;
pub use values::{Document, FieldValue, DATE_FORMAT};
