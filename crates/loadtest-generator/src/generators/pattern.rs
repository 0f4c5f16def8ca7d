//! Title and description text.

use super::vocabulary::{one_of, ADJECTIVES, NOUNS};
use rand::Rng;

/// Generate a product title: `<adjective> <noun> <index>`.
pub fn generate_title<R: Rng>(rng: &mut R, index: u64) -> String {
    let adjective = one_of(rng, ADJECTIVES).unwrap_or_default();
    let noun = one_of(rng, NOUNS).unwrap_or_default();
    format!("{adjective} {noun} {index}")
}

/// Build the description for a title. Uses no randomness of its own.
pub fn generate_description(title: &str) -> String {
    format!(
        "This is a {} designed for optimal performance. It features state-of-the-art technology and comes with a 2-year warranty.",
        title.to_lowercase()
    )
}
