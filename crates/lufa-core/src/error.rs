use thiserror::Error;

use crate::profile::PlanField;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid status transition: {event} while {from}")]
    InvalidTransition {
        from: &'static str,
        event: &'static str,
    },
}

/// Why a decoded payload could not become a [`PlanRecord`](crate::models::plan::PlanRecord).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// Every offending field, in the order the profile lists them.
    #[error("missing required fields: {}", join_fields(.fields))]
    MissingFields { fields: Vec<PlanField> },

    #[error("malformed plan record: {0}")]
    Malformed(String),
}

impl ValidationError {
    /// The offending field names for a `MissingFields` error, empty otherwise.
    pub fn missing_fields(&self) -> &[PlanField] {
        match self {
            Self::MissingFields { fields } => fields,
            _ => &[],
        }
    }
}

fn join_fields(fields: &[PlanField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
