//! Catalog operations over the injected product store.

use crate::{ProductStore, StoreError};
use trove_commerce::catalog::{Category, Product, ProductDraft};
use trove_commerce::ProductId;

/// The catalog: sole owner of the product collection.
///
/// Every operation goes through the backing store: reads load the
/// current durable state, mutations load it, apply the change and write
/// the whole collection back. A mutation that fails to persist is not
/// observable afterwards; read-your-writes always reflects durable
/// state.
///
/// There is no locking between concurrent writers. Two racing mutations
/// read-modify-write the same file and the last write wins; the catalog
/// is maintained by a single operator, so the lost-update window is
/// accepted rather than guarded against.
pub struct Catalog {
    store: Box<dyn ProductStore>,
}

impl Catalog {
    pub fn new(store: impl ProductStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// The full catalog, insertion order preserved.
    pub fn get_all(&self) -> Result<Vec<Product>, StoreError> {
        self.store.load()
    }

    /// Look up one product by ID.
    pub fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.store.load()?.into_iter().find(|p| &p.id == id))
    }

    /// Products in a category, original relative order preserved.
    pub fn get_by_category(&self, category: Category) -> Result<Vec<Product>, StoreError> {
        Ok(self
            .store
            .load()?
            .into_iter()
            .filter(|p| p.category == category)
            .collect())
    }

    /// Case-insensitive substring search over name, description and
    /// category. An empty or whitespace-only term means "no search
    /// performed" and yields an empty result, not the full catalog.
    pub fn search(&self, term: &str) -> Result<Vec<Product>, StoreError> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .store
            .load()?
            .into_iter()
            .filter(|p| p.matches_term(&needle))
            .collect())
    }

    /// Add a product. The store assigns the ID; the created record is
    /// returned only after the collection has been persisted.
    pub fn add(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let mut products = self.store.load()?;
        let product = Product::from_draft(ProductId::generate(), draft);
        products.push(product.clone());

        if let Err(e) = self.store.save_all(&products) {
            tracing::error!(operation = "add", product = %product.id, error = %e, "catalog persistence failed");
            return Err(e);
        }
        Ok(product)
    }

    /// Replace a product's mutable fields. The ID is immutable. Returns
    /// the not-found signal when no product has the given ID.
    pub fn update(&self, id: &ProductId, draft: ProductDraft) -> Result<Product, StoreError> {
        let mut products = self.store.load()?;
        let slot = products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        slot.apply_draft(draft);
        let updated = slot.clone();

        if let Err(e) = self.store.save_all(&products) {
            tracing::error!(operation = "update", product = %id, error = %e, "catalog persistence failed");
            return Err(e);
        }
        Ok(updated)
    }

    /// Remove a product, returning the removed record, or the not-found
    /// signal when no product has the given ID.
    pub fn delete(&self, id: &ProductId) -> Result<Product, StoreError> {
        let mut products = self.store.load()?;
        let index = products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let removed = products.remove(index);

        if let Err(e) = self.store.save_all(&products) {
            tracing::error!(operation = "delete", product = %id, error = %e, "catalog persistence failed");
            return Err(e);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn draft(name: &str, category: Category, description: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            category,
            price: 49.0,
            original_price: None,
            description: description.to_string(),
            image_url: "https://x/img.png".to_string(),
            image_urls: None,
            video_url: None,
            ai_hint: name.to_lowercase(),
            buy_link: None,
        }
    }

    fn seeded_catalog() -> Catalog {
        let catalog = Catalog::new(MemoryStore::new());
        catalog
            .add(draft("Silver Necklace", Category::Jewelry, "sterling silver"))
            .unwrap();
        catalog
            .add(draft("Dune", Category::Books, "science fiction classic"))
            .unwrap();
        catalog
            .add(draft("Desk Lamp", Category::Gadgets, "warm light"))
            .unwrap();
        catalog
    }

    #[test]
    fn test_add_then_get_by_id() {
        let catalog = Catalog::new(MemoryStore::new());
        let input = draft("Silver Necklace", Category::Jewelry, "sterling silver");
        let added = catalog.add(input.clone()).unwrap();

        assert!(!added.id.as_str().is_empty());
        let fetched = catalog.get_by_id(&added.id).unwrap().unwrap();
        assert_eq!(fetched, added);
        // Equal to the input modulo the generated ID.
        assert_eq!(fetched.name, input.name);
        assert_eq!(fetched.price, input.price);
    }

    #[test]
    fn test_get_by_category_is_ordered_subset() {
        let catalog = seeded_catalog();
        catalog
            .add(draft("Gold Ring", Category::Jewelry, "18k gold"))
            .unwrap();

        let all = catalog.get_all().unwrap();
        let jewelry = catalog.get_by_category(Category::Jewelry).unwrap();
        let expected: Vec<_> = all
            .iter()
            .filter(|p| p.category == Category::Jewelry)
            .cloned()
            .collect();
        assert_eq!(jewelry, expected);
        assert_eq!(jewelry.len(), 2);
    }

    #[test]
    fn test_search_empty_term_yields_nothing() {
        let catalog = seeded_catalog();
        assert!(catalog.search("").unwrap().is_empty());
        assert!(catalog.search("   ").unwrap().is_empty());
    }

    #[test]
    fn test_search_matches_name_and_description() {
        let catalog = seeded_catalog();

        let by_name = catalog.search("NECKLACE").unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Silver Necklace");

        let by_description = catalog.search("warm").unwrap();
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].name, "Desk Lamp");

        assert!(catalog.search("telescope").unwrap().is_empty());
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let catalog = seeded_catalog();
        let err = catalog
            .update(&ProductId::new("missing"), draft("X", Category::Books, ""))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_unknown_id_is_not_found() {
        let catalog = seeded_catalog();
        let err = catalog.delete(&ProductId::new("missing")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_update_keeps_id_and_position() {
        let catalog = seeded_catalog();
        let all = catalog.get_all().unwrap();
        let target = all[1].clone();

        let updated = catalog
            .update(&target.id, draft("Dune Messiah", Category::Books, "the sequel"))
            .unwrap();
        assert_eq!(updated.id, target.id);
        assert_eq!(updated.name, "Dune Messiah");

        let after = catalog.get_all().unwrap();
        assert_eq!(after[1].id, target.id);
        assert_eq!(after[1].name, "Dune Messiah");
        assert_eq!(after.len(), all.len());
    }

    #[test]
    fn test_delete_returns_removed_record() {
        let catalog = seeded_catalog();
        let all = catalog.get_all().unwrap();
        let target = all[0].clone();

        let removed = catalog.delete(&target.id).unwrap();
        assert_eq!(removed, target);
        assert!(catalog.get_by_id(&target.id).unwrap().is_none());
        assert_eq!(catalog.get_all().unwrap().len(), all.len() - 1);
    }

    #[test]
    fn test_failed_save_is_not_observable() {
        let store = MemoryStore::new();
        store.fail_next_save();
        let catalog = Catalog::new(store);

        let err = catalog
            .add(draft("Ghost", Category::Gadgets, "should not persist"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Write(_)));
        // Read-your-writes reflects durable state: nothing was added.
        assert!(catalog.get_all().unwrap().is_empty());
    }
}
