//! Product types.

use crate::catalog::Category;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Field names serialize in camelCase so records round-trip the backing
/// file unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier, assigned by the catalog store.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Catalog category.
    pub category: Category,
    /// Selling price. Always positive.
    pub price: f64,
    /// Pre-discount price, shown struck through when present.
    /// Informational only; not enforced to exceed `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Full description shown on the product page.
    #[serde(default)]
    pub description: String,
    /// Primary image reference (URL or data URI). Never empty.
    pub image_url: String,
    /// Additional gallery images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
    /// Optional product video reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Free-text tag feeding downstream image search/classification.
    pub ai_hint: String,
    /// Outbound purchase link, when the product is sold elsewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_link: Option<String>,
}

impl Product {
    /// Materialize a product from validated draft fields and a
    /// store-assigned ID.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            price: draft.price,
            original_price: draft.original_price,
            description: draft.description,
            image_url: draft.image_url,
            image_urls: draft.image_urls,
            video_url: draft.video_url,
            ai_hint: draft.ai_hint,
            buy_link: draft.buy_link,
        }
    }

    /// Replace every mutable field from a draft. The ID is immutable.
    pub fn apply_draft(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.category = draft.category;
        self.price = draft.price;
        self.original_price = draft.original_price;
        self.description = draft.description;
        self.image_url = draft.image_url;
        self.image_urls = draft.image_urls;
        self.video_url = draft.video_url;
        self.ai_hint = draft.ai_hint;
        self.buy_link = draft.buy_link;
    }

    /// Check if the product shows a discount (has an original price
    /// above the selling price).
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|orig| orig > self.price)
            .unwrap_or(false)
    }

    /// Discount percentage when on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|orig| {
            if orig > self.price {
                Some((orig - self.price) / orig * 100.0)
            } else {
                None
            }
        })
    }

    /// Case-insensitive match against name, description and category.
    pub fn matches_term(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
            || self.category.as_str().contains(needle_lower)
    }
}

/// The write-side field set for a product: everything except the ID,
/// which the catalog store assigns. Produced by
/// [`validate_product`](crate::validate::validate_product).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub original_price: Option<f64>,
    pub description: String,
    pub image_url: String,
    pub image_urls: Option<Vec<String>>,
    pub video_url: Option<String>,
    pub ai_hint: String,
    pub buy_link: Option<String>,
}
