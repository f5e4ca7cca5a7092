//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Navigation error: {0}")]
    Navigation(#[from] manta_navigation::NavigationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No browser session for window: {0}")]
    NotInitialized(String),
}

impl CoreError {
    /// True when the user submitted nothing; callers treat this as a no-op.
    pub fn is_empty_input(&self) -> bool {
        matches!(
            self,
            CoreError::Navigation(manta_navigation::NavigationError::EmptyInput)
        )
    }
}
