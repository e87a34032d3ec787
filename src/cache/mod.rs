//! Cache Module
//!
//! Holds the full instructor record set in memory, refreshed wholesale from
//! the record store on a staleness threshold.

mod instructor_cache;


pub use instructor_cache::InstructorCache;
