//! API Module
//!
//! HTTP handlers and routing for the instructor directory REST API.
//!
//! # Endpoints
//! - `GET    /api/instructors` - List all instructors sorted by name
//! - `POST   /api/instructors` - Create an instructor
//! - `GET    /api/instructors/:id` - Get one instructor
//! - `PUT    /api/instructors/:id` - Update name and/or subjects
//! - `DELETE /api/instructors/:id` - Delete an instructor
//! - `POST   /api/instructors/:id/reviews` - Add a review
//! - `POST   /api/instructors/:id/reviews/:review_id/like` - Like a review
//! - `GET    /api/instructors/search?name=` - Prefix search by name
//! - `POST   /api/instructors/import` - Bulk import
//! - `GET    /cache/stats` - Cache introspection
//! - `GET    /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
