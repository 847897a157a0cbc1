//! Error types for the pluggable data stores.

use thiserror::Error;

/// Errors surfaced by document, question, and attempt stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested topic has no backing document or question set.
    #[error("topic not found: {0}")]
    TopicNotFound(String),

    /// The backing data exists but could not be decoded.
    #[error("malformed store data: {0}")]
    Malformed(String),

    /// Underlying filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// True when the error means "no such topic" rather than a faulty store.
    /// Callers use this to distinguish a bad request from a broken backend.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::TopicNotFound(_))
    }
}
