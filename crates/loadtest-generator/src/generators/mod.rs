//! Individual value generators for the catalog fields.
//!
//! Each generator draws from the supplied RNG and returns a typed
//! [`FieldValue`](search_types::FieldValue).

pub mod numeric;
pub mod pattern;
pub mod timestamp;
pub mod vocabulary;

pub use numeric::{generate_price, MAX_PRICE, MIN_PRICE};
pub use pattern::{generate_description, generate_title};
pub use timestamp::{generate_timestamp_within, CREATED_AT_WINDOW_DAYS};
pub use vocabulary::{generate_category, ADJECTIVES, CATEGORIES, NOUNS};
