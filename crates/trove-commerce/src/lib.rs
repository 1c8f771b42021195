//! Storefront domain types and validation for Trove.
//!
//! This crate is the dependency-free core of the storefront:
//!
//! - **Catalog**: products and the closed category set
//! - **Inquiry**: order and wish submissions from the shop front
//! - **Validation**: declarative field rules that turn untyped input
//!   records into typed values, or an ordered list of field errors
//!
//! Persistence and outbound notification live in sibling crates
//! (`trove-store`, `trove-notify`); this crate never touches I/O.

pub mod catalog;
pub mod ids;
pub mod inquiry;
pub mod validate;

pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{Category, Product, ProductDraft};
    pub use crate::ids::ProductId;
    pub use crate::inquiry::{OrderRequest, WishRequest};
    pub use crate::validate::{
        validate_order, validate_product, validate_wish, FieldError, OrderInput, ProductInput,
        WishInput,
    };
}
