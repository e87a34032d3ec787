//! In-Memory Record Store
//!
//! A `RecordStore` implementation holding documents in a local map, used by
//! the test suite and for local development without a reachable store. The
//! availability toggle simulates a store outage so callers can exercise their
//! `StoreUnavailable` paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::Instructor;
use crate::store::{prefix_upper_bound, RecordStore};

// == Memory Record Store ==
/// Document store backed by a process-local map.
#[derive(Default)]
pub struct MemoryRecordStore {
    documents: RwLock<HashMap<String, Instructor>>,
    failing: AtomicBool,
}

impl MemoryRecordStore {
    /// Creates an empty store in the available state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the simulated outage. While failing, every operation returns
    /// `StoreUnavailable` without touching the documents.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(AppError::StoreUnavailable(
                "simulated store outage".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait::async_trait]
impl RecordStore for MemoryRecordStore {
    async fn create(&self, mut record: Instructor) -> Result<Instructor> {
        self.check_available()?;
        record.id = Uuid::new_v4().to_string();

        let mut documents = self.documents.write().await;
        documents.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn get(&self, id: &str) -> Result<Option<Instructor>> {
        self.check_available()?;
        let documents = self.documents.read().await;
        Ok(documents.get(id).cloned())
    }

    async fn update_fields(&self, id: &str, fields: Value) -> Result<()> {
        self.check_available()?;
        let mut documents = self.documents.write().await;
        let record = documents
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("no document with id {id}")))?;

        let mut document = serde_json::to_value(&*record)
            .map_err(|e| AppError::Internal(format!("document serialization failed: {e}")))?;

        match (&mut document, fields) {
            (Value::Object(target), Value::Object(patch)) => {
                for (key, value) in patch {
                    target.insert(key, value);
                }
            }
            _ => {
                return Err(AppError::Validation(
                    "field patch must be a JSON object".to_string(),
                ))
            }
        }

        *record = serde_json::from_value(document)
            .map_err(|e| AppError::Internal(format!("document deserialization failed: {e}")))?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.check_available()?;
        let mut documents = self.documents.write().await;
        documents.remove(id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Instructor>> {
        self.check_available()?;
        let documents = self.documents.read().await;
        Ok(documents.values().cloned().collect())
    }

    async fn query_by_name_prefix(&self, prefix: &str) -> Result<Vec<Instructor>> {
        self.check_available()?;
        let upper = prefix_upper_bound(prefix);
        let documents = self.documents.read().await;
        Ok(documents
            .values()
            .filter(|r| r.name.as_str() >= prefix && r.name <= upper)
            .cloned()
            .collect())
    }
}
