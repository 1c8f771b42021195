//! Purchase inquiry submitted from a product page.

use crate::ids::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated purchase inquiry.
///
/// Created transiently per submission; persisted once to the order
/// record store and forwarded to the notification dispatcher. Field
/// names serialize in camelCase for the record file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Customer's name.
    pub customer_name: String,
    /// Delivery address.
    pub address: String,
    /// Contact phone, digits only, 10 to 15 characters.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Optional social-media handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_handle: Option<String>,
    /// 6-digit postal PIN code.
    pub pin_code: String,
    /// State or region.
    pub state: String,
    /// Free-text question from the customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// The product the inquiry is about.
    pub product_id: ProductId,
    /// Product name captured at submission time.
    pub product_name: String,
    /// Submission instant, ISO-8601 on the wire.
    pub submitted_at: DateTime<Utc>,
}
