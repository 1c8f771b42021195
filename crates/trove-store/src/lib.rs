//! Flat-file persistence for the Trove catalog.
//!
//! The backing store is a single JSON file holding the ordered product
//! list: full-file read on load, full-file overwrite on any mutation.
//! The store seam is a trait (`ProductStore`) so the catalog logic never
//! touches the filesystem directly and tests can run against the
//! in-memory implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use trove_store::{Catalog, JsonFileStore};
//!
//! let catalog = Catalog::new(JsonFileStore::new("data/products.json"));
//! let product = catalog.add(draft)?;
//! let jewelry = catalog.get_by_category(Category::Jewelry)?;
//! ```

mod catalog;
mod error;
mod order_store;
mod store;

pub use catalog::Catalog;
pub use error::StoreError;
pub use order_store::{JsonOrderStore, MemoryOrderStore, OrderRecordStore};
pub use store::{JsonFileStore, MemoryStore, ProductStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Catalog, JsonFileStore, JsonOrderStore, MemoryOrderStore, MemoryStore, OrderRecordStore,
        ProductStore, StoreError,
    };
}
