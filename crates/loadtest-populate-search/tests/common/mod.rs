//! In-memory search service recording every call.

#![allow(dead_code)]

use async_trait::async_trait;
use loadtest_populate_search::{BatchProgress, ProgressObserver};
use search_client::{ClientError, IndexStats, SearchService, ServiceResponse};
use search_types::{Document, IndexDescriptor};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Health,
    Delete(String),
    Create(String),
    AddDocuments { index: String, ids: Vec<String> },
    Stats(String),
}

#[derive(Debug, Clone)]
pub struct StoredIndex {
    pub descriptor: IndexDescriptor,
    pub ids: Vec<String>,
}

pub struct RecordingService {
    reachable: bool,
    create_status: u16,
    create_body: String,
    rejected_batches: HashSet<u64>,
    dropped_batches: HashSet<u64>,
    pub calls: Mutex<Vec<Call>>,
    pub indices: Mutex<HashMap<String, StoredIndex>>,
}

impl RecordingService {
    pub fn new() -> Self {
        Self {
            reachable: true,
            create_status: 201,
            create_body: r#"{"success":true}"#.to_string(),
            rejected_batches: HashSet::new(),
            dropped_batches: HashSet::new(),
            calls: Mutex::new(Vec::new()),
            indices: Mutex::new(HashMap::new()),
        }
    }

    /// Liveness probe fails as if nothing were listening.
    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            ..Self::new()
        }
    }

    /// Create requests answer with this status and body.
    pub fn with_create_response(mut self, status: u16, body: &str) -> Self {
        self.create_status = status;
        self.create_body = body.to_string();
        self
    }

    /// The batch whose first document is `doc_<start>` gets a 500.
    pub fn rejecting_batch_at(mut self, start: u64) -> Self {
        self.rejected_batches.insert(start);
        self
    }

    /// The batch whose first document is `doc_<start>` gets no response.
    pub fn dropping_batch_at(mut self, start: u64) -> Self {
        self.dropped_batches.insert(start);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn ingest_calls(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::AddDocuments { ids, .. } => Some(ids),
                _ => None,
            })
            .collect()
    }

    pub fn index(&self, name: &str) -> Option<StoredIndex> {
        self.indices.lock().unwrap().get(name).cloned()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn start_of(documents: &[Document]) -> Option<u64> {
    documents
        .first()
        .and_then(|doc| doc.id.strip_prefix("doc_"))
        .and_then(|n| n.parse().ok())
}

#[async_trait]
impl SearchService for RecordingService {
    async fn health(&self) -> Result<ServiceResponse, ClientError> {
        self.record(Call::Health);
        if self.reachable {
            Ok(ServiceResponse::new(200, r#"{"status":"healthy"}"#))
        } else {
            Err(ClientError::Api("connection refused".to_string()))
        }
    }

    async fn delete_index(&self, name: &str) -> Result<ServiceResponse, ClientError> {
        self.record(Call::Delete(name.to_string()));
        match self.indices.lock().unwrap().remove(name) {
            Some(_) => Ok(ServiceResponse::new(200, r#"{"success":true}"#)),
            None => Ok(ServiceResponse::new(
                500,
                format!(r#"{{"success":false,"error":"Index not found: {name}"}}"#),
            )),
        }
    }

    async fn create_index(
        &self,
        descriptor: &IndexDescriptor,
    ) -> Result<ServiceResponse, ClientError> {
        self.record(Call::Create(descriptor.name.clone()));
        if matches!(self.create_status, 200 | 201) {
            let mut indices = self.indices.lock().unwrap();
            if indices.contains_key(&descriptor.name) {
                return Ok(ServiceResponse::new(409, "Index already exists"));
            }
            indices.insert(
                descriptor.name.clone(),
                StoredIndex {
                    descriptor: descriptor.clone(),
                    ids: Vec::new(),
                },
            );
        }
        Ok(ServiceResponse::new(self.create_status, self.create_body.clone()))
    }

    async fn add_documents(
        &self,
        index: &str,
        documents: &[Document],
    ) -> Result<ServiceResponse, ClientError> {
        let ids: Vec<String> = documents.iter().map(|d| d.id.clone()).collect();
        self.record(Call::AddDocuments {
            index: index.to_string(),
            ids: ids.clone(),
        });

        let start = start_of(documents);
        if start.is_some_and(|s| self.dropped_batches.contains(&s)) {
            return Err(ClientError::Api("connection reset by peer".to_string()));
        }
        if start.is_some_and(|s| self.rejected_batches.contains(&s)) {
            return Ok(ServiceResponse::new(500, "writer failed"));
        }

        match self.indices.lock().unwrap().get_mut(index) {
            Some(stored) => {
                stored.ids.extend(ids);
                Ok(ServiceResponse::new(200, r#"{"success":true}"#))
            }
            None => Ok(ServiceResponse::new(404, "Index not found")),
        }
    }

    async fn index_stats(&self, index: &str) -> Result<IndexStats, ClientError> {
        self.record(Call::Stats(index.to_string()));
        match self.indices.lock().unwrap().get(index) {
            Some(stored) => Ok(IndexStats {
                name: index.to_string(),
                document_count: stored.ids.len() as u64,
                size_bytes: 0,
                fields: Vec::new(),
                created_at: None,
            }),
            None => Err(ClientError::Status {
                status: 404,
                body: format!("Index not found: {index}"),
            }),
        }
    }
}

/// Observer collecting every progress observation.
#[derive(Default)]
pub struct CollectProgress {
    pub seen: Mutex<Vec<BatchProgress>>,
}

impl CollectProgress {
    pub fn seen(&self) -> Vec<BatchProgress> {
        self.seen.lock().unwrap().clone()
    }
}

impl ProgressObserver for CollectProgress {
    fn on_batch(&self, progress: &BatchProgress) {
        self.seen.lock().unwrap().push(progress.clone());
    }
}
