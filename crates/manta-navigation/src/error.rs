//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Invalid search engine template: {0}")]
    InvalidSearchTemplate(String),
}
