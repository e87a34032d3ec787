//! Record Store Gateway
//!
//! CRUD access to the remote document store holding the authoritative
//! instructor records. The gateway owns identifier generation for new records
//! and performs no caching and no retries of its own; retry policy belongs to
//! the caller.

mod http;
mod memory;

pub use http::HttpRecordStore;
pub use memory::MemoryRecordStore;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::models::Instructor;

/// Interface to the remote document store.
///
/// Every call is a blocking network round trip from the caller's point of
/// view; any transport failure surfaces as a single `StoreUnavailable`
/// condition.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Allocates a new id, writes the full record and returns the stored form
    /// with the id populated.
    async fn create(&self, record: Instructor) -> Result<Instructor>;

    /// Returns the record or None; never touches any cache.
    async fn get(&self, id: &str) -> Result<Option<Instructor>>;

    /// Field-level merge of the named fields into the stored document.
    /// `fields` must be a JSON object.
    async fn update_fields(&self, id: &str, fields: Value) -> Result<()>;

    /// Removes the document. Idempotent: deleting an absent id succeeds.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Returns the complete record set, unordered.
    async fn list_all(&self) -> Result<Vec<Instructor>>;

    /// Range query matching all names lexically between `prefix` and `prefix`
    /// padded with the maximum Unicode code point, approximating "starts
    /// with". Results are unordered.
    async fn query_by_name_prefix(&self, prefix: &str) -> Result<Vec<Instructor>>;
}

/// Inclusive upper bound for a name-prefix range query.
pub fn prefix_upper_bound(prefix: &str) -> String {
    format!("{prefix}\u{10FFFF}")
}
