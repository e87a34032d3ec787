//! Instructor Cache
//!
//! The cache & aggregation layer: the live instructor set, kept sorted by
//! name, refreshed wholesale from the record store once it is older than the
//! staleness threshold. All access goes through a reader/writer lock; the
//! staleness check and the refresh it triggers share one write-lock critical
//! section so two callers cannot race into duplicate refreshes.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::Instructor;
use crate::store::RecordStore;

struct CacheState {
    /// Live record set, sorted by name ascending
    records: Vec<Instructor>,
    /// Time of the last successful full refresh, None before the first
    last_refresh: Option<DateTime<Utc>>,
}

// == Instructor Cache ==
/// In-memory view of the full instructor record set.
pub struct InstructorCache {
    store: Arc<dyn RecordStore>,
    state: RwLock<CacheState>,
    ttl: Duration,
}

impl InstructorCache {
    /// Creates an empty cache over the given store with a staleness threshold
    /// in seconds. The cache is stale until the first successful refresh.
    pub fn new(store: Arc<dyn RecordStore>, ttl_secs: u64) -> Self {
        Self {
            store,
            state: RwLock::new(CacheState {
                records: Vec::new(),
                last_refresh: None,
            }),
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    // == List All ==
    /// Returns a copy of all records, sorted by name ascending.
    ///
    /// Refreshes from the store first when the set is older than the
    /// staleness threshold. A failed refresh is logged and the existing
    /// (stale but valid) records are served instead.
    ///
    /// Fresh listings run under the read lock and do not serialize against
    /// each other; only a stale set takes the write lock. The staleness
    /// check is repeated there since another caller may have refreshed
    /// while this one waited for the lock.
    pub async fn list_all(&self) -> Vec<Instructor> {
        {
            let state = self.state.read().await;
            if !self.is_stale(&state) {
                return state.records.clone();
            }
        }

        let mut state = self.state.write().await;
        if self.is_stale(&state) {
            if let Err(err) = self.refresh_locked(&mut state).await {
                warn!("cache refresh failed, serving cached records: {err}");
            }
        }
        state.records.clone()
    }

    // == Get By Id ==
    /// Serves one record from the current snapshot without forcing a refresh.
    ///
    /// Freshness here is bounded only by the last full refresh or the most
    /// recent individual upsert; a single-record lookup does not pay for a
    /// full-set reload.
    pub async fn get_by_id(&self, id: &str) -> Option<Instructor> {
        let state = self.state.read().await;
        state.records.iter().find(|r| r.id == id).cloned()
    }

    // == Refresh All ==
    /// Fetches the complete record set and replaces the live set atomically.
    ///
    /// The write lock spans the store fetch so only one refresh is ever in
    /// flight. On failure the existing records and `last_refresh` stay
    /// untouched and the error is returned to the caller.
    pub async fn refresh_all(&self) -> Result<()> {
        let mut state = self.state.write().await;
        self.refresh_locked(&mut state).await
    }

    // == Upsert One ==
    /// Replaces the cached record with a matching id, or inserts it.
    ///
    /// Used both to reconcile a single record re-read from the store and to
    /// publish the result of a successful write. The set is re-sorted since
    /// either path may change a record's position.
    pub async fn upsert_one(&self, record: Instructor) {
        let mut state = self.state.write().await;
        match state.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => state.records.push(record),
        }
        state.records.sort_by(|a, b| a.name.cmp(&b.name));
    }

    // == Remove ==
    /// Drops the record with the given id from the cache, if present.
    pub async fn remove(&self, id: &str) {
        let mut state = self.state.write().await;
        state.records.retain(|r| r.id != id);
    }

    // == Introspection ==
    /// Current number of cached records.
    pub async fn len(&self) -> usize {
        self.state.read().await.records.len()
    }

    /// True if no records are cached.
    #[allow(dead_code)]
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.records.is_empty()
    }

    /// Time of the last successful full refresh.
    pub async fn last_refresh_time(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.last_refresh
    }

    fn is_stale(&self, state: &CacheState) -> bool {
        match state.last_refresh {
            Some(at) => Utc::now().signed_duration_since(at) > self.ttl,
            None => true,
        }
    }

    async fn refresh_locked(&self, state: &mut CacheState) -> Result<()> {
        let mut records = self.store.list_all().await?;
        records.sort_by(|a, b| a.name.cmp(&b.name));

        state.records = records;
        state.last_refresh = Some(Utc::now());
        info!("instructor cache refreshed: {} records", state.records.len());
        Ok(())
    }
}
