//! Notification error types.

use thiserror::Error;

/// Errors surfaced by the notification crate.
///
/// Delivery failures never appear here: the dispatcher folds them into
/// the [`DeliveryReport`](crate::DeliveryReport) it returns. This enum
/// covers the configuration check and the image-host client, where the
/// caller does want a hard error.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// A required credential is missing from the environment.
    #[error("not configured: {0}")]
    Config(String),

    /// The image host rejected the upload.
    #[error("image upload failed ({code}): {message}")]
    Upload { code: i64, message: String },

    /// The image host could not be reached or answered garbage.
    #[error("image host request failed: {0}")]
    Http(String),
}
