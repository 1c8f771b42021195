//! Product store implementations.

use crate::StoreError;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use trove_commerce::catalog::Product;

/// Storage seam for the product collection.
///
/// `load` returns the full ordered collection; `save_all` replaces it.
/// Implementations must make the overwrite atomic from the caller's
/// perspective: a reader never observes a partially written collection.
pub trait ProductStore: Send + Sync {
    fn load(&self) -> Result<Vec<Product>, StoreError>;
    fn save_all(&self, products: &[Product]) -> Result<(), StoreError>;
}

// Shared handles work as stores, so a caller can keep a reference to
// the concrete store after handing it to the catalog.
impl<T: ProductStore + ?Sized> ProductStore for std::sync::Arc<T> {
    fn load(&self) -> Result<Vec<Product>, StoreError> {
        (**self).load()
    }

    fn save_all(&self, products: &[Product]) -> Result<(), StoreError> {
        (**self).save_all(products)
    }
}

/// JSON-file-backed product store.
///
/// A missing file reads as an empty catalog. Writes go to a sibling
/// temp file first and are renamed into place, so a crash mid-write
/// leaves the previous contents intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl ProductStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Product>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text)
                .map_err(|e| StoreError::Malformed(format!("{}: {}", self.path.display(), e))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(StoreError::Read(format!("{}: {}", self.path.display(), e))),
        }
    }

    fn save_all(&self, products: &[Product]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(products)
            .map_err(|e| StoreError::Write(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| StoreError::Write(format!("{}: {}", parent.display(), e)))?;
            }
        }

        let tmp = self.temp_path();
        fs::write(&tmp, json)
            .map_err(|e| StoreError::Write(format!("{}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| StoreError::Write(format!("{}: {}", self.path.display(), e)))?;
        Ok(())
    }
}

/// In-memory product store.
///
/// The test double the injected-store seam exists for, and a usable
/// ephemeral store in its own right. `fail_next_save` forces the next
/// `save_all` to fail so persistence-failure paths can be exercised.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: Mutex<Vec<Product>>,
    fail_next_save: Mutex<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            fail_next_save: Mutex::new(false),
        }
    }

    /// Make the next `save_all` return a write error.
    pub fn fail_next_save(&self) {
        *lock(&self.fail_next_save) = true;
    }
}

impl ProductStore for MemoryStore {
    fn load(&self) -> Result<Vec<Product>, StoreError> {
        Ok(lock(&self.products).clone())
    }

    fn save_all(&self, products: &[Product]) -> Result<(), StoreError> {
        let mut fail = lock(&self.fail_next_save);
        if *fail {
            *fail = false;
            return Err(StoreError::Write("injected save failure".to_string()));
        }
        *lock(&self.products) = products.to_vec();
        Ok(())
    }
}

/// Lock a mutex, recovering the data on poison.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trove_commerce::catalog::{Category, Product, ProductDraft};
    use trove_commerce::ProductId;

    fn product(id: &str, name: &str) -> Product {
        Product::from_draft(
            ProductId::new(id),
            ProductDraft {
                name: name.to_string(),
                category: Category::Gadgets,
                price: 25.0,
                original_price: None,
                description: String::new(),
                image_url: "https://x/g.png".to_string(),
                image_urls: None,
                video_url: None,
                ai_hint: "gadget".to_string(),
                buy_link: None,
            },
        )
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());

        store.save_all(&[product("p1", "Lamp")]).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Lamp");
    }

    #[test]
    fn test_memory_store_injected_failure_is_one_shot() {
        let store = MemoryStore::new();
        store.fail_next_save();
        assert!(store.save_all(&[product("p1", "Lamp")]).is_err());
        // The failed save must not have taken effect.
        assert!(store.load().unwrap().is_empty());
        // And the next save succeeds again.
        store.save_all(&[product("p1", "Lamp")]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
