//! Document generator for the search-populate loader.
//!
//! This crate provides the `DocumentGenerator` which produces synthetic
//! product-catalog documents conforming to
//! [`IndexDescriptor::product_catalog`](search_types::IndexDescriptor::product_catalog).
//! Values are random; only their shape, ranges and types are fixed.
//!
//! # Architecture
//!
//! ```text
//! DocumentGenerator { seed }
//!        │  generate(count)
//!        ▼
//! ┌─────────────────┐
//! │   Documents     │
//! │                 │
//! │  - rng (StdRng) │
//! │  - now          │
//! │  - index        │
//! └────────┬────────┘
//!          │
//!          ▼
//!    Document { id: "doc_<n>", fields }
//! ```
//!
//! # Example
//!
//! ```rust
//! use loadtest_generator::DocumentGenerator;
//!
//! let generator = DocumentGenerator::new(Some(42));
//! let ids: Vec<String> = generator.generate(3).map(|doc| doc.id).collect();
//! assert_eq!(ids, vec!["doc_0", "doc_1", "doc_2"]);
//! ```
//!
//! # Fields
//!
//! - `title` - `<adjective> <noun> <n>` from fixed vocabularies
//! - `description` - fixed sentence around the lower-cased title
//! - `category` - one of a fixed set
//! - `price` - uniform in `[10.0, 1000.0]`, two decimals
//! - `created_at` - uniform within the 365 days before generation

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{generate_document, DocumentGenerator, Documents};
