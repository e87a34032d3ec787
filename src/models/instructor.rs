//! Instructor and Review entities
//!
//! Domain types mirrored by the remote document store. The `averageRating`
//! and `reviewCount` fields are derived from `reviews` and recomputed on
//! every review mutation, never accepted from callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// == Review ==
/// A single student review attached to an instructor record.
///
/// Reviews are exclusively owned by their parent instructor and only go away
/// when the instructor record is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Opaque identifier, generated locally at creation time
    pub id: String,
    /// Name of the reviewing student
    pub student: String,
    /// Review text
    pub comment: String,
    /// Star rating in [1,5]
    pub stars: u8,
    /// Submission timestamp, immutable after creation
    pub submitted_at: DateTime<Utc>,
    /// Monotonically non-decreasing like counter
    #[serde(default)]
    pub like_count: u32,
    /// Optional photo reference, no validation applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// Optional contact email, no validation applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Review {
    /// Creates a new review with a fresh id, the current timestamp and zero likes.
    pub fn new(
        student: String,
        comment: String,
        stars: u8,
        photo: Option<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            student,
            comment,
            stars,
            submitted_at: Utc::now(),
            like_count: 0,
            photo,
            email,
        }
    }
}

// == Instructor ==
/// An instructor record with its nested review list and derived aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    /// Opaque identifier, assigned by the store gateway on creation
    pub id: String,
    /// Display name; sort key for listings
    pub name: String,
    /// User-editable subject list, order-preserving
    #[serde(default)]
    pub subjects: Vec<String>,
    /// Reviews in submission order
    #[serde(default)]
    pub reviews: Vec<Review>,
    /// Mean star rating rounded to one decimal, 0.0 with no reviews
    #[serde(default)]
    pub average_rating: f64,
    /// Always equals `reviews.len()`
    #[serde(default)]
    pub review_count: usize,
}

impl Instructor {
    /// Creates a new record with no reviews. The id is left empty until the
    /// store gateway assigns one.
    pub fn new(name: String, subjects: Vec<String>) -> Self {
        Self {
            id: String::new(),
            name,
            subjects,
            reviews: Vec::new(),
            average_rating: 0.0,
            review_count: 0,
        }
    }

    /// Recomputes `average_rating` and `review_count` from the review list.
    ///
    /// Must be called after every mutation of `reviews` so the two derived
    /// fields are never inconsistent with each other in a returned value.
    pub fn recompute_aggregates(&mut self) {
        self.review_count = self.reviews.len();
        self.average_rating = average_rating(&self.reviews);
    }
}

// == Aggregate Computation ==
/// Mean star rating rounded to one decimal place, 0.0 for an empty set.
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.stars)).sum();
    let mean = f64::from(sum) / reviews.len() as f64;
    (mean * 10.0).round() / 10.0
}
