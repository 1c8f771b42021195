//! The wish intake flow: validate → notify.
//!
//! A wish is a lead-generation inquiry, not a transactional record, so
//! there is no persistence stage. Capturing the intent is done once
//! validation succeeds; a delivery failure is reported for operator
//! visibility but does not fail the flow.

use crate::{Intake, IntakeError, IntakeStage};
use trove_commerce::inquiry::WishRequest;
use trove_commerce::validate::{validate_wish, WishInput};
use trove_notify::Notification;

/// Result of an accepted wish submission.
#[derive(Debug, Clone)]
pub struct WishOutcome {
    /// The validated wish.
    pub record: WishRequest,
    /// Whether the operator notification went through.
    pub notified: bool,
    /// Delivery failure description, when `notified` is false.
    pub delivery_warning: Option<String>,
}

impl Intake {
    /// Submit a wish request.
    pub async fn submit_wish(&self, input: &WishInput) -> Result<WishOutcome, IntakeError> {
        tracing::debug!(stage = IntakeStage::Validating.as_str(), "wish intake");
        let wish = validate_wish(input)?;

        tracing::debug!(stage = IntakeStage::Notifying.as_str(), "wish intake");
        let report = self.dispatcher().notify(Notification::Wish(&wish)).await;
        if !report.delivered {
            tracing::warn!(reason = %report.message, "wish accepted but notification undelivered");
        }

        tracing::debug!(stage = IntakeStage::Done.as_str(), "wish intake");
        Ok(WishOutcome {
            record: wish,
            notified: report.delivered,
            delivery_warning: if report.delivered {
                None
            } else {
                Some(report.message)
            },
        })
    }
}
