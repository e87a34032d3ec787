//! Domain, request and response models for the instructor directory
//!
//! This module defines the instructor/review domain entities plus the DTOs
//! (Data Transfer Objects) used for HTTP request and response bodies.

pub mod instructor;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use instructor::{average_rating, Instructor, Review};
pub use requests::{
    CreateInstructorRequest, CreateReviewRequest, SearchParams, UpdateInstructorRequest,
};
pub use responses::{CacheStatsResponse, ErrorResponse, HealthResponse, MessageResponse};
