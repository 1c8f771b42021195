//! Declarative validation of inbound records.
//!
//! Each entry point takes an untyped input record (all fields optional,
//! as they arrive from a form or JSON body) and returns either the
//! normalized typed value or an ordered list of field errors. Validation
//! never mutates external state and never panics on malformed input;
//! only a malformed rule (a bad regex literal) is a programmer error.

mod inquiry;
mod product;

pub use inquiry::{validate_order, validate_wish, OrderInput, WishInput};
pub use product::{validate_product, ProductInput};

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;

/// A single field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Path of the offending field (camelCase, as submitted).
    pub field: String,
    /// Human-readable message, shown next to the field.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Accumulates field errors in rule-declaration order.
#[derive(Debug, Default)]
pub(crate) struct Errors(Vec<FieldError>);

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve to the typed value when no rule fired.
    pub fn into_result<T>(self, value: T) -> Result<T, Vec<FieldError>> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(self.0)
        }
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }
}

/// Strict contact phone: digits only, 10 to 15 characters.
pub(crate) fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{10,15}$").unwrap())
}

/// 6-digit postal PIN code.
pub(crate) fn pin_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{6}$").unwrap())
}

/// Loose phone format for the wish widget: optional `+`, then digits
/// with common separators.
pub(crate) fn loose_phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[0-9][0-9\s\-()]{6,19}$").unwrap())
}

/// Minimal email shape: something@something.tld, no whitespace.
pub(crate) fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Require a non-empty trimmed string; pushes an error and returns
/// `None` when absent or blank.
pub(crate) fn required_text(
    errors: &mut Errors,
    field: &str,
    value: Option<&str>,
) -> Option<String> {
    match value.map(str::trim) {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => {
            errors.push(field, format!("{field} is required"));
            None
        }
    }
}

/// Normalize an optional string: trimmed, empty becomes absent.
pub(crate) fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Accept http(s) URLs and data URIs for image/link fields.
pub(crate) fn is_url_like(s: &str) -> bool {
    (s.starts_with("http://") && s.len() > 7)
        || (s.starts_with("https://") && s.len() > 8)
        || (s.starts_with("data:") && s.len() > 5)
}
