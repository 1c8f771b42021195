//! Order and wish intake validation.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::inquiry::{OrderRequest, WishRequest};
use crate::validate::{
    email_re, loose_phone_re, optional_text, phone_re, pin_re, required_text, Errors, FieldError,
};
use chrono::Utc;
use serde::Deserialize;

/// Untyped order fields as submitted from a product page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderInput {
    pub customer_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub social_handle: Option<String>,
    pub pin_code: Option<String>,
    pub state: Option<String>,
    pub query: Option<String>,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
}

/// Validate an order submission.
///
/// The submission timestamp is stamped here, at the moment the record
/// becomes a typed value.
pub fn validate_order(input: &OrderInput) -> Result<OrderRequest, Vec<FieldError>> {
    let mut errors = Errors::new();

    let customer_name = required_text(&mut errors, "customerName", input.customer_name.as_deref());
    let address = required_text(&mut errors, "address", input.address.as_deref());

    let phone = required_text(&mut errors, "phone", input.phone.as_deref());
    if let Some(phone) = &phone {
        if !phone_re().is_match(phone) {
            errors.push("phone", "phone must be 10 to 15 digits");
        }
    }

    let email = required_text(&mut errors, "email", input.email.as_deref());
    if let Some(email) = &email {
        if !email_re().is_match(email) {
            errors.push("email", "email address is not valid");
        }
    }

    let social_handle = optional_text(input.social_handle.as_deref());

    let pin_code = required_text(&mut errors, "pinCode", input.pin_code.as_deref());
    if let Some(pin) = &pin_code {
        if !pin_re().is_match(pin) {
            errors.push("pinCode", "PIN code must be exactly 6 digits");
        }
    }

    let state = required_text(&mut errors, "state", input.state.as_deref());
    let query = optional_text(input.query.as_deref());
    let product_id = required_text(&mut errors, "productId", input.product_id.as_deref());
    let product_name = required_text(&mut errors, "productName", input.product_name.as_deref());

    match (customer_name, address, phone, email, pin_code, state, product_id, product_name) {
        (
            Some(customer_name),
            Some(address),
            Some(phone),
            Some(email),
            Some(pin_code),
            Some(state),
            Some(product_id),
            Some(product_name),
        ) if errors.is_empty() => Ok(OrderRequest {
            customer_name,
            address,
            phone,
            email,
            social_handle,
            pin_code,
            state,
            query,
            product_id: ProductId::new(product_id),
            product_name,
            submitted_at: Utc::now(),
        }),
        _ => Err(errors.into_vec()),
    }
}

/// Untyped wish fields as submitted from the wish widget.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WishInput {
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_provided: Option<bool>,
    pub full_name: Option<String>,
    pub contact_number: Option<String>,
}

/// Validate a wish submission.
pub fn validate_wish(input: &WishInput) -> Result<WishRequest, Vec<FieldError>> {
    let mut errors = Errors::new();

    let category = match input.category.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => match Category::from_str(s) {
            Some(category) => Some(category),
            None => {
                errors.push("category", "category must be jewelry, books or gadgets");
                None
            }
        },
        _ => None,
    };

    let description = required_text(&mut errors, "description", input.description.as_deref());
    let full_name = required_text(&mut errors, "fullName", input.full_name.as_deref());

    let contact_number =
        required_text(&mut errors, "contactNumber", input.contact_number.as_deref());
    if let Some(number) = &contact_number {
        if !loose_phone_re().is_match(number) {
            errors.push("contactNumber", "contact number is not a valid phone number");
        }
    }

    match (description, full_name, contact_number) {
        (Some(description), Some(full_name), Some(contact_number)) if errors.is_empty() => {
            Ok(WishRequest {
                category,
                description,
                image_provided: input.image_provided.unwrap_or(false),
                full_name,
                contact_number,
                submitted_at: Utc::now(),
            })
        }
        _ => Err(errors.into_vec()),
    }
}
