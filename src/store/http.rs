//! HTTP Record Store
//!
//! reqwest-based gateway to the remote JSON document store. Documents live at
//! `{base}/{collection}/{id}`; the collection endpoint answers listings and
//! name range queries. Every request carries the configured timeout, and an
//! expired call surfaces as `StoreUnavailable` like any other transport
//! failure.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::Instructor;
use crate::store::{prefix_upper_bound, RecordStore};

// == HTTP Record Store ==
/// Gateway to a remote document store over its REST interface.
pub struct HttpRecordStore {
    client: reqwest::Client,
    base_url: String,
    collection: String,
}

impl HttpRecordStore {
    /// Creates a gateway for one collection with a per-request timeout.
    pub fn new(base_url: &str, collection: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build store client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            collection: collection.to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.collection)
    }

    fn document_url(&self, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.collection, id)
    }
}

fn unavailable(err: reqwest::Error) -> AppError {
    AppError::StoreUnavailable(err.to_string())
}

/// Maps any non-success status to `StoreUnavailable`.
fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(AppError::StoreUnavailable(format!(
            "store returned status {}",
            response.status()
        )))
    }
}

#[async_trait::async_trait]
impl RecordStore for HttpRecordStore {
    async fn create(&self, mut record: Instructor) -> Result<Instructor> {
        record.id = Uuid::new_v4().to_string();
        debug!("creating document {} in {}", record.id, self.collection);

        let response = self
            .client
            .put(self.document_url(&record.id))
            .json(&record)
            .send()
            .await
            .map_err(unavailable)?;
        ensure_success(response)?;

        Ok(record)
    }

    async fn get(&self, id: &str) -> Result<Option<Instructor>> {
        let response = self
            .client
            .get(self.document_url(id))
            .send()
            .await
            .map_err(unavailable)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let record = ensure_success(response)?
            .json::<Instructor>()
            .await
            .map_err(unavailable)?;
        Ok(Some(record))
    }

    async fn update_fields(&self, id: &str, fields: Value) -> Result<()> {
        let response = self
            .client
            .patch(self.document_url(id))
            .json(&fields)
            .send()
            .await
            .map_err(unavailable)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("no document with id {id}")));
        }

        ensure_success(response)?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.document_url(id))
            .send()
            .await
            .map_err(unavailable)?;

        // Deleting an already-absent document is a success at this level
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }

        ensure_success(response)?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Instructor>> {
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(unavailable)?;

        let records = ensure_success(response)?
            .json::<Vec<Instructor>>()
            .await
            .map_err(unavailable)?;
        Ok(records)
    }

    async fn query_by_name_prefix(&self, prefix: &str) -> Result<Vec<Instructor>> {
        let upper = prefix_upper_bound(prefix);
        let response = self
            .client
            .get(self.collection_url())
            .query(&[("name_gte", prefix), ("name_lte", upper.as_str())])
            .send()
            .await
            .map_err(unavailable)?;

        let records = ensure_success(response)?
            .json::<Vec<Instructor>>()
            .await
            .map_err(unavailable)?;
        Ok(records)
    }
}
