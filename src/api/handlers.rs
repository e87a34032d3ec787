//! API Handlers
//!
//! HTTP request handlers for each instructor directory endpoint. Request
//! validation lives here, at the boundary; commands that reach the service
//! are already well-formed.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{AppError, Result};
use crate::models::{
    CacheStatsResponse, CreateInstructorRequest, CreateReviewRequest, HealthResponse, Instructor,
    MessageResponse, SearchParams, UpdateInstructorRequest,
};
use crate::service::InstructorService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The command layer owning cache and store gateway
    pub service: Arc<InstructorService>,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: InstructorService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Handler for GET /api/instructors
pub async fn list_instructors_handler(State(state): State<AppState>) -> Json<Vec<Instructor>> {
    Json(state.service.list().await)
}

/// Handler for GET /api/instructors/:id
pub async fn get_instructor_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Instructor>> {
    let instructor = state.service.get(&id).await?;
    Ok(Json(instructor))
}

/// Handler for POST /api/instructors
pub async fn create_instructor_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateInstructorRequest>,
) -> Result<(StatusCode, Json<Instructor>)> {
    if let Some(error_msg) = request.validate() {
        return Err(AppError::Validation(error_msg));
    }

    let created = state.service.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for PUT /api/instructors/:id
pub async fn update_instructor_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateInstructorRequest>,
) -> Result<Json<Instructor>> {
    if let Some(error_msg) = request.validate() {
        return Err(AppError::Validation(error_msg));
    }

    let updated = state.service.update(&id, request).await?;
    Ok(Json(updated))
}

/// Handler for DELETE /api/instructors/:id
pub async fn delete_instructor_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    state.service.delete(&id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Instructor '{id}' deleted successfully"
    ))))
}

/// Handler for POST /api/instructors/:id/reviews
pub async fn add_review_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<CreateReviewRequest>,
) -> Result<Json<Instructor>> {
    if let Some(error_msg) = request.validate() {
        return Err(AppError::Validation(error_msg));
    }

    let updated = state.service.add_review(&id, request).await?;
    Ok(Json(updated))
}

/// Handler for POST /api/instructors/:id/reviews/:review_id/like
pub async fn like_review_handler(
    State(state): State<AppState>,
    Path((id, review_id)): Path<(String, String)>,
) -> Result<Json<Instructor>> {
    let updated = state.service.like_review(&id, &review_id).await?;
    Ok(Json(updated))
}

/// Handler for GET /api/instructors/search?name=
pub async fn search_instructors_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Instructor>>> {
    let results = state.service.search_by_name(&params.name).await?;
    Ok(Json(results))
}

/// Handler for POST /api/instructors/import
///
/// Validates every item before any write so a bad item never leaves a
/// partially imported batch behind.
pub async fn bulk_import_handler(
    State(state): State<AppState>,
    Json(requests): Json<Vec<CreateInstructorRequest>>,
) -> Result<(StatusCode, Json<Vec<Instructor>>)> {
    for request in &requests {
        if let Some(error_msg) = request.validate() {
            return Err(AppError::Validation(error_msg));
        }
    }

    let created = state.service.bulk_import(requests).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for GET /cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let cache = state.service.cache();
    Json(CacheStatsResponse::new(
        cache.len().await,
        cache.last_refresh_time().await,
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
