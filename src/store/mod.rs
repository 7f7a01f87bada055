//! The ledger store: typed, cached collections over a raw storage backend.
//!
//! One `Ledger` instance is the single source of truth for a session. Reads
//! go through an in-memory cache of whole collection documents; writes update
//! the cache first and then write through. A backend failure is logged and
//! swallowed so the session stays consistent even when persistence does not.
//! Observers registered with [`Ledger::subscribe`] hear about every
//! collection change, so independent consumers never diverge on stale copies.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::warn;

use crate::domain::entities::{Expense, Payment, Project, Record};
use crate::domain::ports::StorageBackend;
use crate::domain::value_objects::{CollectionKey, EntityId};
use crate::error::{LedgerError, LedgerResult};

/// Outcome of a cascading project deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletedProject {
    pub project: Project,
    pub expenses_removed: usize,
    pub payments_removed: usize,
}

type Observer = Box<dyn Fn(CollectionKey)>;

/// Typed key-scoped store with an in-memory cache.
pub struct Ledger<B: StorageBackend> {
    backend: B,
    cache: BTreeMap<CollectionKey, Value>,
    observers: Vec<Observer>,
}

impl<B: StorageBackend> Ledger<B> {
    pub fn new(backend: B) -> Self {
        Ledger {
            backend,
            cache: BTreeMap::new(),
            observers: Vec::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Register a change observer, called with the key of every collection
    /// that is written for the rest of this session.
    pub fn subscribe(&mut self, observer: impl Fn(CollectionKey) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Load a collection. Absent or unreadable documents yield the empty
    /// collection, never an error.
    pub fn collection<T: Record>(&mut self) -> Vec<T> {
        self.ensure_loaded(T::KEY);
        let document = self
            .cache
            .get(&T::KEY)
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));
        decode(&document, T::KEY)
    }

    /// Find one record by id in its collection.
    pub fn find<T: Record>(&mut self, id: &EntityId) -> Option<T> {
        self.collection::<T>().into_iter().find(|r| r.id() == id)
    }

    /// Replace a collection document wholesale and notify observers.
    pub fn save_collection<T: Record>(&mut self, items: &[T]) {
        let document = match serde_json::to_value(items) {
            Ok(document) => document,
            Err(err) => {
                warn!(key = %T::KEY, error = %err, "failed to serialize collection; write skipped");
                return;
            }
        };
        self.put_document(T::KEY, document);
    }

    /// Remove a project and cascade-delete its expenses and payments.
    ///
    /// Referential cleanup lives here, in the store layer, so no consumer can
    /// remove a project and leave orphans behind.
    pub fn delete_project(&mut self, id: &EntityId) -> LedgerResult<DeletedProject> {
        let mut projects: Vec<Project> = self.collection();
        let position = projects
            .iter()
            .position(|p| p.id == *id)
            .ok_or_else(|| LedgerError::ProjectNotFound { id: id.to_string() })?;
        let project = projects.remove(position);

        let mut expenses: Vec<Expense> = self.collection();
        let expense_count = expenses.len();
        expenses.retain(|e| e.project_id != *id);
        let expenses_removed = expense_count - expenses.len();

        let mut payments: Vec<Payment> = self.collection();
        let payment_count = payments.len();
        payments.retain(|p| p.project_id != *id);
        let payments_removed = payment_count - payments.len();

        self.save_collection(&projects);
        self.save_collection(&expenses);
        self.save_collection(&payments);

        Ok(DeletedProject {
            project,
            expenses_removed,
            payments_removed,
        })
    }

    fn ensure_loaded(&mut self, key: CollectionKey) {
        if self.cache.contains_key(&key) {
            return;
        }
        let document = match self.backend.read_raw(key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(%key, error = %err, "stored document is not valid JSON; starting from empty");
                Value::Array(Vec::new())
            }),
            Ok(None) => Value::Array(Vec::new()),
            Err(err) => {
                warn!(%key, error = %err, "read failed; starting from empty");
                Value::Array(Vec::new())
            }
        };
        self.cache.insert(key, document);
    }

    fn put_document(&mut self, key: CollectionKey, document: Value) {
        let raw = document.to_string();
        self.cache.insert(key, document);
        if let Err(err) = self.backend.write_raw(key, &raw) {
            warn!(%key, error = %err, "persist failed; keeping in-memory value for this session");
        }
        self.notify(key);
    }

    fn notify(&self, key: CollectionKey) {
        for observer in &self.observers {
            observer(key);
        }
    }
}

/// Decode a collection document, tolerating unknown fields (logged) and
/// falling back to empty on shape mismatches.
fn decode<T: Record>(document: &Value, key: CollectionKey) -> Vec<T> {
    let result = serde_ignored::deserialize(document, |path| {
        warn!(%key, field = %path, "ignoring unknown field in stored document");
    });
    result.unwrap_or_else(|err: serde_json::Error| {
        warn!(%key, error = %err, "stored document does not match the expected shape; starting from empty");
        Vec::new()
    })
}
