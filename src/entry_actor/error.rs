use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during timesheet entry operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EntryError {
    #[error("Entry not found: {0}")]
    NotFound(String),
    #[error("Entry validation error: {0}")]
    Validation(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for EntryError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => Self::NotFound(id),
            FrameworkError::Rejected(reason) => Self::Validation(reason),
            other => Self::ActorCommunicationError(other.to_string()),
        }
    }
}
