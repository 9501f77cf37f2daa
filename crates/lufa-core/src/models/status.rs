use crate::error::CoreError;
use crate::models::plan::PlanRecord;

/// Where the application is in the generate / show / export cycle.
///
/// `Idle` is only ever the initial state. There is no terminal state: the
/// user can regenerate or retry indefinitely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Generating,
    Completed(PlanRecord),
    Failed { message: String },
}

/// Something that moves the status machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusEvent {
    /// User asked for a plan: first run, retry after failure, or regenerate.
    Generate,
    /// The outstanding request settled with a valid plan.
    Succeeded(PlanRecord),
    /// The outstanding request settled with an error, already rendered for
    /// display.
    Failed(String),
}

impl GenerationStatus {
    /// Compute the state that follows `event`.
    ///
    /// A failure does not carry the previous plan forward: once a request
    /// fails there is nothing to show or export until a new one succeeds.
    pub fn next(&self, event: StatusEvent) -> Result<GenerationStatus, CoreError> {
        match (self, event) {
            (Self::Idle | Self::Failed { .. } | Self::Completed(_), StatusEvent::Generate) => {
                Ok(Self::Generating)
            }
            (Self::Generating, StatusEvent::Succeeded(plan)) => Ok(Self::Completed(plan)),
            (Self::Generating, StatusEvent::Failed(message)) => Ok(Self::Failed { message }),
            (from, event) => Err(CoreError::InvalidTransition {
                from: from.label(),
                event: event.label(),
            }),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Generating => "generating",
            Self::Completed(_) => "completed",
            Self::Failed { .. } => "failed",
        }
    }

    /// The plan currently on display, if any.
    pub fn plan(&self) -> Option<&PlanRecord> {
        match self {
            Self::Completed(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn is_generating(&self) -> bool {
        matches!(self, Self::Generating)
    }
}

impl StatusEvent {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Generate => "generate",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}
