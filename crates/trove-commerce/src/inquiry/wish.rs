//! "Find me this item" inquiry, decoupled from any specific product.

use crate::catalog::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated wish request.
///
/// Transient by design: validated, forwarded to the notification
/// dispatcher, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WishRequest {
    /// Category hint, when the customer picked one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// What the customer is looking for.
    pub description: String,
    /// Whether the customer attached a reference image.
    pub image_provided: bool,
    /// Customer's full name.
    pub full_name: String,
    /// Contact number, loose phone format.
    pub contact_number: String,
    /// Submission instant.
    pub submitted_at: DateTime<Utc>,
}
