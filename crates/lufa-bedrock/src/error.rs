use lufa_core::error::ValidationError;
use thiserror::Error;

/// Failure reported by a structured-generation backend before any payload
/// was produced (network, credentials, quota, throttling).
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("model invocation failed: {0}")]
    Transport(String),

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("response parsing failed: {0}")]
    MalformedPayload(String),

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(#[source] ValidationError),
}

impl GenerationError {
    /// Short machine-readable kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::EmptyResponse => "empty_response",
            Self::MalformedPayload(_) => "malformed_payload",
            Self::SchemaViolation(_) => "schema_violation",
        }
    }
}

impl From<TransportError> for GenerationError {
    fn from(e: TransportError) -> Self {
        GenerationError::Transport(e.0)
    }
}

impl From<ValidationError> for GenerationError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::NotAnObject { found } => {
                GenerationError::MalformedPayload(format!("expected a JSON object, found {found}"))
            }
            other => GenerationError::SchemaViolation(other),
        }
    }
}
