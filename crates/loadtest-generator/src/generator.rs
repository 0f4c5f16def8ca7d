//! Main document generator.

use crate::generators::{
    generate_category, generate_description, generate_price, generate_timestamp_within,
    generate_title, CREATED_AT_WINDOW_DAYS,
};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use search_types::{
    Document, FieldValue, CATEGORY_FIELD, CREATED_AT_FIELD, DESCRIPTION_FIELD, PRICE_FIELD,
    TITLE_FIELD,
};
use std::iter::FusedIterator;

/// Factory for lazy document sequences.
///
/// Each call to [`generate`](Self::generate) starts a fresh sequence at
/// `doc_0`. With a seed every sequence carries the same values (timestamps
/// stay relative to the moment the sequence was started); without one each
/// sequence draws from OS entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentGenerator {
    seed: Option<u64>,
}

impl DocumentGenerator {
    /// Create a new document generator with an optional seed.
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    /// The configured seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Start a lazy sequence of `count` documents, `doc_0` through `doc_{count-1}`.
    pub fn generate(&self, count: u64) -> Documents {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Documents {
            rng,
            now: Utc::now(),
            index: 0,
            count,
        }
    }
}

/// Build one catalog document for the given index.
pub fn generate_document<R: Rng>(rng: &mut R, index: u64, now: DateTime<Utc>) -> Document {
    let title = generate_title(rng, index);
    let description = generate_description(&title);
    let category = generate_category(rng);
    let price = generate_price(rng);
    let created_at =
        generate_timestamp_within(rng, now, Duration::days(CREATED_AT_WINDOW_DAYS));

    Document::new(format!("doc_{index}"))
        .with_field(TITLE_FIELD, FieldValue::Text(title))
        .with_field(DESCRIPTION_FIELD, FieldValue::Text(description))
        .with_field(CATEGORY_FIELD, category)
        .with_field(PRICE_FIELD, price)
        .with_field(CREATED_AT_FIELD, created_at)
}

/// Iterator that lazily generates documents.
pub struct Documents {
    rng: StdRng,
    now: DateTime<Utc>,
    index: u64,
    count: u64,
}

impl Documents {
    /// Index of the next document to be produced.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Total number of documents in this sequence.
    pub fn total(&self) -> u64 {
        self.count
    }

    /// The instant `created_at` values are drawn back from.
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.now
    }
}

impl Iterator for Documents {
    type Item = Document;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }

        let document = generate_document(&mut self.rng, self.index, self.now);
        self.index += 1;
        Some(document)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.count - self.index).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Documents {}

impl FusedIterator for Documents {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{CATEGORIES, MAX_PRICE, MIN_PRICE};
    use search_types::IndexDescriptor;
    use std::collections::HashSet;

    #[test]
    fn test_generate_single_document() {
        let mut documents = DocumentGenerator::new(Some(42)).generate(1);

        let doc = documents.next().unwrap();
        assert_eq!(doc.id, "doc_0");

        let title = doc.get_field(TITLE_FIELD).and_then(FieldValue::as_str).unwrap();
        assert!(title.ends_with(" 0"));

        let description = doc
            .get_field(DESCRIPTION_FIELD)
            .and_then(FieldValue::as_str)
            .unwrap();
        assert!(description.contains(&title.to_lowercase()));

        assert!(documents.next().is_none());
    }

    #[test]
    fn test_documents_conform_to_catalog() {
        let descriptor = IndexDescriptor::product_catalog("products");

        for doc in DocumentGenerator::new(None).generate(200) {
            assert!(doc.conforms_to(&descriptor), "{doc:?} does not conform");

            let category = doc.get_field(CATEGORY_FIELD).and_then(FieldValue::as_str).unwrap();
            assert!(CATEGORIES.contains(&category));

            let price = doc.get_field(PRICE_FIELD).and_then(FieldValue::as_f64).unwrap();
            assert!((MIN_PRICE..=MAX_PRICE).contains(&price));
        }
    }

    #[test]
    fn test_ids_are_sequential_and_distinct() {
        let ids: Vec<String> = DocumentGenerator::new(None)
            .generate(1000)
            .map(|doc| doc.id)
            .collect();

        let expected: Vec<String> = (0..1000).map(|n| format!("doc_{n}")).collect();
        assert_eq!(ids, expected);

        let distinct: HashSet<&String> = ids.iter().collect();
        assert_eq!(distinct.len(), 1000);
    }

    #[test]
    fn test_generate_zero() {
        let mut documents = DocumentGenerator::default().generate(0);
        assert_eq!(documents.len(), 0);
        assert!(documents.next().is_none());
    }

    #[test]
    fn test_restartable() {
        let generator = DocumentGenerator::new(None);

        let first: Vec<String> = generator.generate(5).map(|doc| doc.id).collect();
        let second: Vec<String> = generator.generate(5).map(|doc| doc.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_seeded_generation_repeats_values() {
        let generator = DocumentGenerator::new(Some(42));

        let first: Vec<Document> = generator.generate(10).collect();
        let second: Vec<Document> = generator.generate(10).collect();

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.get_field(TITLE_FIELD), b.get_field(TITLE_FIELD));
            assert_eq!(a.get_field(CATEGORY_FIELD), b.get_field(CATEGORY_FIELD));
            assert_eq!(a.get_field(PRICE_FIELD), b.get_field(PRICE_FIELD));
        }
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let mut documents = DocumentGenerator::new(Some(1)).generate(3);

        assert_eq!(documents.len(), 3);
        documents.next();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents.current_index(), 1);
        assert_eq!(documents.total(), 3);
    }
}
