//! Fixed vocabularies and selection from them.

use rand::seq::IndexedRandom;
use rand::Rng;
use search_types::FieldValue;

/// Adjectives used for product titles.
pub const ADJECTIVES: &[&str] = &[
    "Advanced",
    "Eco-friendly",
    "Durable",
    "Lightweight",
    "Premium",
    "Budget",
    "Smart",
    "Ergonomic",
];

/// Nouns used for product titles.
pub const NOUNS: &[&str] = &[
    "Widget",
    "Gadget",
    "Tool",
    "Device",
    "System",
    "Solution",
    "Interface",
    "Module",
];

/// Product categories.
pub const CATEGORIES: &[&str] = &["Electronics", "Home", "Office", "Industrial", "Outdoor"];

/// Pick one entry uniformly at random; `None` for an empty slice.
pub fn one_of<'a, R: Rng>(rng: &mut R, values: &[&'a str]) -> Option<&'a str> {
    values.choose(rng).copied()
}

/// Generate a `category` keyword value.
pub fn generate_category<R: Rng>(rng: &mut R) -> FieldValue {
    FieldValue::String(one_of(rng, CATEGORIES).unwrap_or_default().to_string())
}
