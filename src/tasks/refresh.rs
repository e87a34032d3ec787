//! Cache Refresh Task
//!
//! Background task that periodically reloads the full instructor set from the
//! record store, keeping reads warm between TTL-triggered refreshes. A store
//! outage is logged and swallowed; the cache keeps serving its last good
//! snapshot.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::service::InstructorService;

/// Spawns a background task that periodically refreshes the instructor cache.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between refreshes.
///
/// # Arguments
/// * `service` - Shared service whose cache will be refreshed
/// * `refresh_interval_secs` - Interval in seconds between refresh runs
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_refresh_task(
    service: Arc<InstructorService>,
    refresh_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(refresh_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache refresh task with interval of {} seconds",
            refresh_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            match service.cache().refresh_all().await {
                Ok(()) => {
                    debug!("scheduled cache refresh complete");
                }
                Err(err) => {
                    // Stale-but-valid beats empty; keep the old snapshot
                    warn!("scheduled cache refresh failed: {err}");
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Instructor;
    use crate::store::{MemoryRecordStore, RecordStore};

    #[tokio::test]
    async fn test_refresh_task_picks_up_new_records() {
        let store = Arc::new(MemoryRecordStore::new());
        let service = Arc::new(InstructorService::new(store.clone(), 1800));

        store
            .create(Instructor::new("Ana".to_string(), vec![]))
            .await
            .unwrap();

        let handle = spawn_refresh_task(service.clone(), 1);

        // Wait for at least one refresh run
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(service.cache().len().await, 1);
        handle.abort();
    }

    #[tokio::test]
    async fn test_refresh_task_survives_store_outage() {
        let store = Arc::new(MemoryRecordStore::new());
        let service = Arc::new(InstructorService::new(store.clone(), 1800));

        store
            .create(Instructor::new("Ana".to_string(), vec![]))
            .await
            .unwrap();
        service.cache().refresh_all().await.unwrap();

        store.set_failing(true);
        let handle = spawn_refresh_task(service.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        // Old snapshot survives the failed refreshes
        assert_eq!(service.cache().len().await, 1);
        assert!(!handle.is_finished());
        handle.abort();
    }

    #[tokio::test]
    async fn test_refresh_task_can_be_aborted() {
        let store = Arc::new(MemoryRecordStore::new());
        let service = Arc::new(InstructorService::new(store, 1800));

        let handle = spawn_refresh_task(service, 1);

        // Abort immediately
        handle.abort();

        // Wait a bit and verify task is finished
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
