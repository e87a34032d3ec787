//! Instructor Service
//!
//! The command layer combining the record store gateway and the cache.
//! Reads come out of the cache; mutations always fetch the authoritative
//! record from the store, apply the change, recompute the derived aggregates,
//! push the result to the store, and only then publish the new state to the
//! cache. A store failure therefore leaves the cached view untouched.
//!
//! Store I/O happens outside the cache lock; only the final upsert takes it.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::cache::InstructorCache;
use crate::error::{AppError, Result};
use crate::models::{
    CreateInstructorRequest, CreateReviewRequest, Instructor, Review, UpdateInstructorRequest,
};
use crate::store::RecordStore;

// == Instructor Service ==
/// Owns the cache and the store gateway; all commands go through here.
pub struct InstructorService {
    store: Arc<dyn RecordStore>,
    cache: InstructorCache,
}

impl InstructorService {
    /// Creates the service and its cache over the given store.
    pub fn new(store: Arc<dyn RecordStore>, cache_ttl_secs: u64) -> Self {
        let cache = InstructorCache::new(store.clone(), cache_ttl_secs);
        Self { store, cache }
    }

    /// The cache, for startup loading, background refresh and diagnostics.
    pub fn cache(&self) -> &InstructorCache {
        &self.cache
    }

    // == List ==
    /// All instructors sorted by name, served from the cache.
    pub async fn list(&self) -> Vec<Instructor> {
        self.cache.list_all().await
    }

    // == Get ==
    /// One instructor from the current cache snapshot.
    pub async fn get(&self, id: &str) -> Result<Instructor> {
        self.cache
            .get_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Instructor not found with id {id}")))
    }

    // == Create ==
    /// Creates an instructor with zero reviews and publishes it to the cache.
    pub async fn create(&self, request: CreateInstructorRequest) -> Result<Instructor> {
        let record = Instructor::new(request.name, request.subjects);
        let stored = self.store.create(record).await?;

        info!("created instructor {} ({})", stored.name, stored.id);
        self.cache.upsert_one(stored.clone()).await;
        Ok(stored)
    }

    // == Update ==
    /// Applies the provided fields to the stored record.
    pub async fn update(&self, id: &str, request: UpdateInstructorRequest) -> Result<Instructor> {
        let mut record = self.fetch(id).await?;
        if let Some(name) = request.name {
            record.name = name;
        }
        if let Some(subjects) = request.subjects {
            record.subjects = subjects;
        }

        self.store
            .update_fields(
                id,
                json!({
                    "name": &record.name,
                    "subjects": &record.subjects,
                }),
            )
            .await?;

        self.cache.upsert_one(record.clone()).await;
        Ok(record)
    }

    // == Delete ==
    /// Removes the record from the store and the cache.
    ///
    /// An already-absent id is a not-found outcome for the caller even though
    /// the gateway-level delete itself is idempotent.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.fetch(id).await?;
        self.store.delete(id).await?;
        self.cache.remove(id).await;

        info!("deleted instructor {id}");
        Ok(())
    }

    // == Add Review ==
    /// Appends a review, recomputes the aggregates and writes the review
    /// fields through to the store.
    pub async fn add_review(&self, id: &str, request: CreateReviewRequest) -> Result<Instructor> {
        let mut record = self.fetch(id).await?;

        let review = Review::new(
            request.student,
            request.comment,
            request.stars as u8,
            request.photo,
            request.email,
        );
        record.reviews.push(review);
        record.recompute_aggregates();

        self.store
            .update_fields(
                id,
                json!({
                    "reviews": &record.reviews,
                    "reviewCount": record.review_count,
                    "averageRating": record.average_rating,
                }),
            )
            .await?;

        self.cache.upsert_one(record.clone()).await;
        Ok(record)
    }

    // == Like Review ==
    /// Increments the like counter of exactly one review.
    ///
    /// A missing instructor or review id returns NotFound and mutates
    /// nothing.
    pub async fn like_review(&self, id: &str, review_id: &str) -> Result<Instructor> {
        let mut record = self.fetch(id).await?;

        {
            let review = record
                .reviews
                .iter_mut()
                .find(|r| r.id == review_id)
                .ok_or_else(|| {
                    AppError::NotFound(format!("Review not found with id {review_id}"))
                })?;
            review.like_count += 1;
        }

        self.store
            .update_fields(id, json!({ "reviews": &record.reviews }))
            .await?;

        self.cache.upsert_one(record.clone()).await;
        Ok(record)
    }

    // == Search By Name ==
    /// Prefix search against the store, results sorted by name.
    pub async fn search_by_name(&self, prefix: &str) -> Result<Vec<Instructor>> {
        let mut results = self.store.query_by_name_prefix(prefix).await?;
        results.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(results)
    }

    // == Bulk Import ==
    /// Creates one record per request item and publishes each to the cache.
    pub async fn bulk_import(
        &self,
        requests: Vec<CreateInstructorRequest>,
    ) -> Result<Vec<Instructor>> {
        let mut created = Vec::with_capacity(requests.len());
        for request in requests {
            let stored = self
                .store
                .create(Instructor::new(request.name, request.subjects))
                .await?;
            self.cache.upsert_one(stored.clone()).await;
            created.push(stored);
        }

        info!("bulk import created {} instructors", created.len());
        Ok(created)
    }

    /// Authoritative read for the write paths: always against the store.
    async fn fetch(&self, id: &str) -> Result<Instructor> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Instructor not found with id {id}")))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryRecordStore;

    fn create_request(name: &str, subjects: &[&str]) -> CreateInstructorRequest {
        CreateInstructorRequest {
            name: name.to_string(),
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn review_request(student: &str, comment: &str, stars: i32) -> CreateReviewRequest {
        CreateReviewRequest {
            student: student.to_string(),
            comment: comment.to_string(),
            stars,
            photo: None,
            email: None,
        }
    }

    fn service() -> (InstructorService, Arc<MemoryRecordStore>) {
        let store = Arc::new(MemoryRecordStore::new());
        (InstructorService::new(store.clone(), 1800), store)
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let (service, _) = service();

        let created = service
            .create(create_request("Lee", &["Math"]))
            .await
            .unwrap();
        assert_eq!(created.review_count, 0);
        assert_eq!(created.average_rating, 0.0);

        let fetched = service.get(&created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let (service, _) = service();
        let result = service.get("nope").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_review_scenario_updates_aggregates() {
        let (service, _) = service();
        let created = service
            .create(create_request("Lee", &["Math"]))
            .await
            .unwrap();

        let after_first = service
            .add_review(&created.id, review_request("Kim", "Great", 4))
            .await
            .unwrap();
        assert_eq!(after_first.review_count, 1);
        assert_eq!(after_first.average_rating, 4.0);
        assert_eq!(after_first.reviews[0].like_count, 0);

        let after_second = service
            .add_review(&created.id, review_request("Sam", "Good", 5))
            .await
            .unwrap();
        assert_eq!(after_second.review_count, 2);
        assert_eq!(after_second.average_rating, 4.5);

        let first_review_id = after_second.reviews[0].id.clone();
        let after_like = service
            .like_review(&created.id, &first_review_id)
            .await
            .unwrap();
        assert_eq!(after_like.reviews[0].like_count, 1);
        assert_eq!(after_like.reviews[1].like_count, 0);
    }

    #[tokio::test]
    async fn test_add_review_preserves_submission_order() {
        let (service, _) = service();
        let created = service.create(create_request("Lee", &[])).await.unwrap();

        for (student, stars) in [("Kim", 4), ("Sam", 5), ("Ana", 3)] {
            service
                .add_review(&created.id, review_request(student, "ok", stars))
                .await
                .unwrap();
        }

        let record = service.get(&created.id).await.unwrap();
        let students: Vec<&str> = record.reviews.iter().map(|r| r.student.as_str()).collect();
        assert_eq!(students, vec!["Kim", "Sam", "Ana"]);
    }

    #[tokio::test]
    async fn test_like_review_missing_review_mutates_nothing() {
        let (service, _) = service();
        let created = service.create(create_request("Lee", &[])).await.unwrap();
        service
            .add_review(&created.id, review_request("Kim", "Great", 4))
            .await
            .unwrap();

        let result = service.like_review(&created.id, "missing-review").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        let record = service.get(&created.id).await.unwrap();
        assert_eq!(record.reviews[0].like_count, 0);
    }

    #[tokio::test]
    async fn test_like_review_missing_instructor_is_not_found() {
        let (service, _) = service();
        let result = service.like_review("nope", "whatever").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_applies_partial_fields() {
        let (service, _) = service();
        let created = service
            .create(create_request("Lee", &["Math"]))
            .await
            .unwrap();

        let updated = service
            .update(
                &created.id,
                UpdateInstructorRequest {
                    name: None,
                    subjects: Some(vec!["Physics".to_string()]),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Lee");
        assert_eq!(updated.subjects, vec!["Physics".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_removes_from_store_and_cache() {
        let (service, store) = service();
        let created = service.create(create_request("Lee", &[])).await.unwrap();

        service.delete(&created.id).await.unwrap();

        assert!(matches!(
            service.get(&created.id).await,
            Err(AppError::NotFound(_))
        ));
        assert_eq!(store.get(&created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let (service, _) = service();
        let result = service.delete("nope").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_search_is_prefix_only_and_sorted() {
        let (service, _) = service();
        for name in ["Beto", "Anita", "Ana"] {
            service.create(create_request(name, &[])).await.unwrap();
        }

        let results = service.search_by_name("An").await.unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Anita"]);

        // Substring inside a name does not match
        assert!(service.search_by_name("ta").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bulk_import_creates_all_records() {
        let (service, _) = service();
        let created = service
            .bulk_import(vec![
                create_request("Carla", &["Art"]),
                create_request("Ana", &[]),
            ])
            .await
            .unwrap();
        assert_eq!(created.len(), 2);

        let listed = service.list().await;
        let names: Vec<&str> = listed.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Carla"]);
    }

    #[tokio::test]
    async fn test_store_failure_leaves_cache_unchanged() {
        let (service, store) = service();
        let created = service.create(create_request("Lee", &[])).await.unwrap();

        store.set_failing(true);
        let result = service
            .add_review(&created.id, review_request("Kim", "Great", 4))
            .await;
        assert!(matches!(result, Err(AppError::StoreUnavailable(_))));

        // Cached record still shows the pre-failure state
        let cached = service.get(&created.id).await.unwrap();
        assert_eq!(cached.review_count, 0);
        assert_eq!(cached.average_rating, 0.0);
    }
}
