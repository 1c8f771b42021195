//! Product write-path validation.

use crate::catalog::{Category, ProductDraft};
use crate::validate::{is_url_like, optional_text, required_text, Errors, FieldError};
use serde::Deserialize;

/// Untyped product fields as they arrive from the admin form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductInput {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub image_urls: Option<Vec<String>>,
    pub video_url: Option<String>,
    pub ai_hint: Option<String>,
    pub buy_link: Option<String>,
}

/// Validate product fields for add/update.
///
/// Returns the normalized draft or the field errors in declaration
/// order. A zero or absent `originalPrice` is coerced to absent rather
/// than rejected; the selling price itself must be positive.
pub fn validate_product(input: &ProductInput) -> Result<ProductDraft, Vec<FieldError>> {
    let mut errors = Errors::new();

    let name = required_text(&mut errors, "name", input.name.as_deref());
    if let Some(name) = &name {
        if name.len() > 200 {
            errors.push("name", "name must be at most 200 characters");
        }
    }

    let category = match input.category.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => match Category::from_str(s) {
            Some(category) => Some(category),
            None => {
                errors.push("category", "category must be jewelry, books or gadgets");
                None
            }
        },
        _ => {
            errors.push("category", "category is required");
            None
        }
    };

    let price = match input.price {
        Some(p) if p > 0.0 && p.is_finite() => Some(p),
        _ => {
            errors.push("price", "price must be greater than zero");
            None
        }
    };

    // 0 means "no original price" on the form.
    let original_price = match input.original_price {
        Some(p) if p > 0.0 && p.is_finite() => Some(p),
        Some(p) if p < 0.0 || !p.is_finite() => {
            errors.push("originalPrice", "original price must be greater than zero");
            None
        }
        _ => None,
    };

    let description = optional_text(input.description.as_deref()).unwrap_or_default();

    let image_url = required_text(&mut errors, "imageUrl", input.image_url.as_deref());
    if let Some(url) = &image_url {
        if !is_url_like(url) {
            errors.push("imageUrl", "image must be a URL or data URI");
        }
    }

    let image_urls = input.image_urls.as_ref().map(|urls| {
        urls.iter()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .collect::<Vec<_>>()
    });
    if let Some(urls) = &image_urls {
        for url in urls {
            if !is_url_like(url) {
                errors.push("imageUrls", "every gallery image must be a URL or data URI");
                break;
            }
        }
    }
    let image_urls = image_urls.filter(|urls| !urls.is_empty());

    let video_url = optional_text(input.video_url.as_deref());
    if let Some(url) = &video_url {
        if !is_url_like(url) {
            errors.push("videoUrl", "video must be a URL");
        }
    }

    let ai_hint = required_text(&mut errors, "aiHint", input.ai_hint.as_deref());

    let buy_link = optional_text(input.buy_link.as_deref());
    if let Some(url) = &buy_link {
        if !is_url_like(url) {
            errors.push("buyLink", "buy link must be a URL");
        }
    }

    match (name, category, price, image_url, ai_hint) {
        (Some(name), Some(category), Some(price), Some(image_url), Some(ai_hint))
            if errors.is_empty() =>
        {
            Ok(ProductDraft {
                name,
                category,
                price,
                original_price,
                description,
                image_url,
                image_urls,
                video_url,
                ai_hint,
                buy_link,
            })
        }
        _ => Err(errors.into_vec()),
    }
}
