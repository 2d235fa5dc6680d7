//! Document store abstraction
//!
//! The record collections persist as three independent documents. Where they
//! live is decided by a [`DocumentStore`]: JSON files on disk for the
//! application, an in-process map for tests and embedding.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::config::paths::SpendwisePaths;
use crate::error::{SpendwiseError, SpendwiseResult};

use super::file_io::{read_json, write_json_atomic};

/// The kind of record a document holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Transactions,
    Categories,
    Budgets,
}

impl RecordKind {
    pub fn all() -> &'static [RecordKind] {
        &[Self::Transactions, Self::Categories, Self::Budgets]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Transactions => "transactions",
            Self::Categories => "categories",
            Self::Budgets => "budgets",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Persistence collaborator for the record collections
pub trait DocumentStore: Send + Sync {
    /// Load the stored document for `kind`, `Ok(None)` if nothing was stored yet
    fn load(&self, kind: RecordKind) -> SpendwiseResult<Option<Value>>;

    /// Replace the stored document for `kind`
    fn save(&self, kind: RecordKind, document: &Value) -> SpendwiseResult<()>;
}

/// Stores each document as `<data_dir>/<kind>.json`
pub struct JsonFileStore {
    paths: SpendwisePaths,
}

impl JsonFileStore {
    pub fn new(paths: SpendwisePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &SpendwisePaths {
        &self.paths
    }

    fn path_for(&self, kind: RecordKind) -> std::path::PathBuf {
        match kind {
            RecordKind::Transactions => self.paths.transactions_file(),
            RecordKind::Categories => self.paths.categories_file(),
            RecordKind::Budgets => self.paths.budgets_file(),
        }
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self, kind: RecordKind) -> SpendwiseResult<Option<Value>> {
        read_json(self.path_for(kind))
    }

    fn save(&self, kind: RecordKind, document: &Value) -> SpendwiseResult<()> {
        write_json_atomic(self.path_for(kind), document)
    }
}

/// Keeps documents in memory
///
/// Saves can be switched to fail, to exercise the divergence between memory
/// and storage.
#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<RecordKind, Value>>,
    fail_saves: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a document, e.g. with malformed data
    pub fn with_document(self, kind: RecordKind, document: Value) -> Self {
        if let Ok(mut documents) = self.documents.write() {
            documents.insert(kind, document);
        }
        self
    }

    /// Make every subsequent save fail (or succeed again)
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// The last successfully saved document for `kind`
    pub fn document(&self, kind: RecordKind) -> Option<Value> {
        self.documents
            .read()
            .ok()
            .and_then(|documents| documents.get(&kind).cloned())
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self, kind: RecordKind) -> SpendwiseResult<Option<Value>> {
        let documents = self
            .documents
            .read()
            .map_err(|e| SpendwiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(documents.get(&kind).cloned())
    }

    fn save(&self, kind: RecordKind, document: &Value) -> SpendwiseResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(SpendwiseError::Storage(format!(
                "Failed to save {}: store is not writable",
                kind
            )));
        }

        let mut documents = self
            .documents
            .write()
            .map_err(|e| SpendwiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        documents.insert(kind, document.clone());
        Ok(())
    }
}

// A store shared through an Arc is still a store; lets tests keep a handle
impl<S: DocumentStore + ?Sized> DocumentStore for std::sync::Arc<S> {
    fn load(&self, kind: RecordKind) -> SpendwiseResult<Option<Value>> {
        (**self).load(kind)
    }

    fn save(&self, kind: RecordKind, document: &Value) -> SpendwiseResult<()> {
        (**self).save(kind, document)
    }
}

/// Load and decode a document, falling back to an empty collection
///
/// Missing, unreadable or malformed documents all yield `T::default()`. The
/// failure is logged and otherwise dropped.
pub(crate) fn load_or_default<T>(store: &dyn DocumentStore, kind: RecordKind) -> T
where
    T: DeserializeOwned + Default,
{
    match store.load(kind) {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(%kind, error = %e, "malformed document, starting empty");
                T::default()
            }
        },
        Ok(None) => {
            tracing::debug!(%kind, "no stored document, starting empty");
            T::default()
        }
        Err(e) => {
            tracing::warn!(%kind, error = %e, "failed to load document, starting empty");
            T::default()
        }
    }
}

/// Encode and persist a document
pub(crate) fn save_document<T>(store: &dyn DocumentStore, kind: RecordKind, data: &T) -> SpendwiseResult<()>
where
    T: Serialize,
{
    let value = serde_json::to_value(data)
        .map_err(|e| SpendwiseError::Storage(format!("Failed to serialize {}: {}", kind, e)))?;
    store.save(kind, &value)
}
