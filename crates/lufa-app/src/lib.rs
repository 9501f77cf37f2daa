//! lufa-app library root.
//!
//! Re-exports internal modules so that integration tests can drive the
//! controller and the terminal loop without AWS.

pub mod aws;
pub mod config;
pub mod controller;
pub mod terminal;
