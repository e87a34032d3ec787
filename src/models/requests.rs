//! Request DTOs for the instructor directory API
//!
//! Defines the structure of incoming HTTP request bodies. Validation happens
//! here, at the boundary, before a command ever reaches the cache layer.

use serde::Deserialize;

/// Request body for creating an instructor (POST /api/instructors)
/// and for each item of a bulk import.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInstructorRequest {
    /// Display name, required
    pub name: String,
    /// Initial subject list
    #[serde(default)]
    pub subjects: Vec<String>,
}

impl CreateInstructorRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Instructor name is required".to_string());
        }
        None
    }
}

/// Request body for updating an instructor (PUT /api/instructors/{id}).
///
/// Both fields are optional; omitted fields keep their current value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInstructorRequest {
    /// Replacement display name
    #[serde(default)]
    pub name: Option<String>,
    /// Replacement subject list
    #[serde(default)]
    pub subjects: Option<Vec<String>>,
}

impl UpdateInstructorRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Some("Instructor name cannot be empty".to_string());
            }
        }
        None
    }
}

/// Request body for adding a review (POST /api/instructors/{id}/reviews)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReviewRequest {
    /// Name of the reviewing student, required
    pub student: String,
    /// Review text, required
    pub comment: String,
    /// Star rating, must be in [1,5]
    pub stars: i32,
    /// Optional photo reference
    #[serde(default)]
    pub photo: Option<String>,
    /// Optional contact email
    #[serde(default)]
    pub email: Option<String>,
}

impl CreateReviewRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.student.trim().is_empty() {
            return Some("Student name is required".to_string());
        }
        if self.comment.trim().is_empty() {
            return Some("Comment is required".to_string());
        }
        if !(1..=5).contains(&self.stars) {
            return Some("Stars must be between 1 and 5".to_string());
        }
        None
    }
}

/// Query parameters for name search (GET /api/instructors/search)
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Name prefix to match
    pub name: String,
}
