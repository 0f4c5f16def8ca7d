//! Partitioning a document stream into batches.

use search_types::Document;
use std::iter::FusedIterator;
use std::num::NonZeroUsize;
use std::ops::Range;

/// A contiguous run of documents submitted as one ingestion request.
#[derive(Debug, Clone)]
pub struct Batch {
    /// Position of the first document in the run
    pub start_index: u64,
    /// Documents in submission order
    pub documents: Vec<Document>,
}

impl Batch {
    /// One past the position of the last document.
    pub fn end_index(&self) -> u64 {
        self.start_index + self.documents.len() as u64
    }

    /// Positions covered by this batch.
    pub fn range(&self) -> Range<u64> {
        self.start_index..self.end_index()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Iterator adapter grouping documents into batches of at most `batch_size`.
///
/// Every batch but the last holds exactly `batch_size` documents; no batch
/// is empty.
pub struct Batches<I> {
    inner: I,
    batch_size: NonZeroUsize,
    next_start: u64,
}

impl<I> Batches<I>
where
    I: Iterator<Item = Document>,
{
    pub fn new(inner: I, batch_size: NonZeroUsize) -> Self {
        Self {
            inner,
            batch_size,
            next_start: 0,
        }
    }
}

impl<I> Iterator for Batches<I>
where
    I: Iterator<Item = Document>,
{
    type Item = Batch;

    fn next(&mut self) -> Option<Self::Item> {
        let documents: Vec<Document> = self.inner.by_ref().take(self.batch_size.get()).collect();
        if documents.is_empty() {
            return None;
        }

        let batch = Batch {
            start_index: self.next_start,
            documents,
        };
        self.next_start = batch.end_index();
        Some(batch)
    }
}

impl<I> FusedIterator for Batches<I> where I: FusedIterator<Item = Document> {}

/// Position ranges of the batches a run of `count` documents produces.
pub fn plan_batches(count: u64, batch_size: NonZeroUsize) -> Vec<Range<u64>> {
    let size = batch_size.get() as u64;
    (0..count)
        .step_by(batch_size.get())
        .map(|start| start..(start + size).min(count))
        .collect()
}
