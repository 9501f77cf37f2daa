//! lufa-bedrock
//!
//! Structured plan generation: the fixed prompt, the Bedrock adapter for
//! the structured-generation capability, and the client that turns its
//! payload into a validated plan.

pub mod client;
pub mod error;
pub mod generator;
pub mod prompt;
pub mod tokens;
