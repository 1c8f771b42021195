//! Human-readable message rendering for the operator channel.
//!
//! All dynamic content goes through [`escape_markdown`]; literal
//! punctuation in the templates is pre-escaped by hand.

use crate::escape::escape_markdown;
use chrono::{DateTime, Utc};
use trove_commerce::inquiry::{OrderRequest, WishRequest};

/// Render an order inquiry for the operator channel.
pub fn render_order(order: &OrderRequest) -> String {
    let mut text = String::from("🛍 *New order inquiry*\n\n");

    push_field(&mut text, "Product", &order.product_name);
    push_field(&mut text, "Product ID", order.product_id.as_str());
    push_field(&mut text, "Customer", &order.customer_name);
    push_field(&mut text, "Phone", &order.phone);
    push_field(&mut text, "Email", &order.email);
    push_field(&mut text, "Address", &order.address);
    push_field(&mut text, "PIN", &order.pin_code);
    push_field(&mut text, "State", &order.state);
    if let Some(handle) = &order.social_handle {
        push_field(&mut text, "Social", handle);
    }
    if let Some(query) = &order.query {
        push_field(&mut text, "Query", query);
    }
    push_field(&mut text, "Received", &format_instant(order.submitted_at));

    text
}

/// Render a wish request for the operator channel.
pub fn render_wish(wish: &WishRequest) -> String {
    let mut text = String::from("✨ *New wish request*\n\n");

    push_field(&mut text, "Item", &wish.description);
    let category = wish
        .category
        .map(|c| c.display_name())
        .unwrap_or("Any");
    push_field(&mut text, "Category", category);
    push_field(
        &mut text,
        "Reference image",
        if wish.image_provided { "yes" } else { "no" },
    );
    push_field(&mut text, "Name", &wish.full_name);
    push_field(&mut text, "Contact", &wish.contact_number);
    push_field(&mut text, "Received", &format_instant(wish.submitted_at));

    text
}

fn push_field(text: &mut String, label: &str, value: &str) {
    text.push('*');
    text.push_str(label);
    text.push_str(":* ");
    text.push_str(&escape_markdown(value));
    text.push('\n');
}

fn format_instant(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M UTC").to_string()
}
