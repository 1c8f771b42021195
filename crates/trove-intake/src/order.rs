//! The order intake flow: validate → persist → notify.

use crate::{Intake, IntakeError, IntakeStage};
use trove_commerce::inquiry::OrderRequest;
use trove_commerce::validate::{validate_order, OrderInput};
use trove_notify::Notification;

/// Result of a successful order submission.
///
/// `notified` is false when the order was durably recorded but the
/// operator notification could not be delivered; `delivery_warning`
/// then carries the reason so the caller can warn the user without
/// implying the order was lost.
#[derive(Debug, Clone)]
pub struct OrderOutcome {
    /// The confirmed, persisted record.
    pub record: OrderRequest,
    /// Whether the operator notification went through.
    pub notified: bool,
    /// Delivery failure description, when `notified` is false.
    pub delivery_warning: Option<String>,
}

impl Intake {
    /// Submit a purchase inquiry.
    ///
    /// Exits at the first failing stage: validation errors and an
    /// unknown product produce no persistence write and no notification
    /// call; a persistence failure produces no notification call. A
    /// notification failure after the record is durable does not fail
    /// the flow.
    pub async fn submit_order(&self, input: &OrderInput) -> Result<OrderOutcome, IntakeError> {
        tracing::debug!(stage = IntakeStage::Validating.as_str(), "order intake");
        let order = validate_order(input)?;

        if self.catalog().get_by_id(&order.product_id)?.is_none() {
            return Err(IntakeError::NotFound(order.product_id.to_string()));
        }

        tracing::debug!(stage = IntakeStage::Persisting.as_str(), product = %order.product_id, "order intake");
        if let Err(e) = self.orders().save(&order) {
            tracing::error!(product = %order.product_id, error = %e, "order record write failed");
            return Err(e.into());
        }

        tracing::debug!(stage = IntakeStage::Notifying.as_str(), "order intake");
        let report = self.dispatcher().notify(Notification::Order(&order)).await;
        if !report.delivered {
            tracing::warn!(
                product = %order.product_id,
                reason = %report.message,
                "order recorded but notification undelivered"
            );
        }

        tracing::debug!(stage = IntakeStage::Done.as_str(), "order intake");
        Ok(OrderOutcome {
            record: order,
            notified: report.delivered,
            delivery_warning: if report.delivered {
                None
            } else {
                Some(report.message)
            },
        })
    }
}
