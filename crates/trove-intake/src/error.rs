//! Intake error types.

use thiserror::Error;
use trove_commerce::validate::FieldError;
use trove_store::StoreError;

/// Failures an intake flow returns to the presentation layer.
///
/// Delivery failures are deliberately absent: once the primary durable
/// effect has succeeded, a failed notification rides inside the success
/// outcome as a warning, so a flaky channel can never make a recorded
/// order look lost.
#[derive(Error, Debug)]
pub enum IntakeError {
    /// Field-level validation failures, in rule order.
    #[error("validation failed: {}", format_fields(.0))]
    Validation(Vec<FieldError>),

    /// The mutation or inquiry target does not exist.
    #[error("product not found: {0}")]
    NotFound(String),

    /// The backing store could not be read or written.
    #[error("persistence failed: {0}")]
    Persistence(#[source] StoreError),
}

impl IntakeError {
    /// The field errors, when this is a validation failure.
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            IntakeError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<Vec<FieldError>> for IntakeError {
    fn from(errors: Vec<FieldError>) -> Self {
        IntakeError::Validation(errors)
    }
}

impl From<StoreError> for IntakeError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => IntakeError::NotFound(id),
            other => IntakeError::Persistence(other),
        }
    }
}

fn format_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_found_maps_to_not_found() {
        let err: IntakeError = StoreError::NotFound("p9".to_string()).into();
        assert!(matches!(err, IntakeError::NotFound(_)));
    }

    #[test]
    fn test_store_write_maps_to_persistence() {
        let err: IntakeError = StoreError::Write("disk full".to_string()).into();
        assert!(matches!(err, IntakeError::Persistence(_)));
    }

    #[test]
    fn test_validation_display_lists_fields() {
        let err = IntakeError::Validation(vec![
            FieldError::new("phone", "phone must be 10 to 15 digits"),
            FieldError::new("email", "email address is not valid"),
        ]);
        assert_eq!(err.to_string(), "validation failed: phone, email");
    }
}
