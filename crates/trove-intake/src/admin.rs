//! The admin mutation surface.
//!
//! One orchestration path for catalog writes: validate the fields, then
//! delegate to the catalog. Callers (the admin pages) are responsible
//! for any downstream view invalidation.

use crate::{Intake, IntakeError};
use trove_commerce::catalog::Product;
use trove_commerce::validate::{validate_product, ProductInput};
use trove_commerce::ProductId;

impl Intake {
    /// Create a product from untyped admin-form fields.
    pub fn add_product(&self, input: &ProductInput) -> Result<Product, IntakeError> {
        let draft = validate_product(input)?;
        Ok(self.catalog().add(draft)?)
    }

    /// Update a product. An unknown ID is a not-found failure, distinct
    /// from any validation failure.
    pub fn update_product(
        &self,
        id: &ProductId,
        input: &ProductInput,
    ) -> Result<Product, IntakeError> {
        let draft = validate_product(input)?;
        Ok(self.catalog().update(id, draft)?)
    }

    /// Delete a product, returning the removed record.
    pub fn delete_product(&self, id: &ProductId) -> Result<Product, IntakeError> {
        Ok(self.catalog().delete(id)?)
    }
}
