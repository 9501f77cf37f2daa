//! lufa-core
//!
//! Pure domain types for the Lufa export planner: the plan record, the
//! response schema and its validator, the report view model and the
//! application status machine. No AWS or PDF dependency.

pub mod error;
pub mod models;
pub mod profile;
pub mod report;
pub mod schema;
pub mod validate;
