//! Store error types.

use thiserror::Error;

/// Errors that can occur against the backing store.
///
/// `NotFound` is a distinct signal from any validation failure: it means
/// the mutation target does not exist, nothing more.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read the backing file.
    #[error("failed to read backing store: {0}")]
    Read(String),

    /// Failed to write the backing file.
    #[error("failed to write backing store: {0}")]
    Write(String),

    /// The backing file exists but does not parse.
    #[error("malformed backing store: {0}")]
    Malformed(String),

    /// Mutation target absent (update/delete on an unknown ID).
    #[error("product not found: {0}")]
    NotFound(String),
}

impl StoreError {
    /// True when the error is the not-found signal.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
