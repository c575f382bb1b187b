use thiserror::Error;

use crate::config::ConfigError;

/// Failures while starting or stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Seed generation failed: {0}")]
    Seed(String),
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(String),
}
