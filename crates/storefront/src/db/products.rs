//! Product list guarded by a read-write lock.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use shutterhive_core::ProductId;
use shutterhive_core::admin::NewProduct;
use shutterhive_core::catalog::{Product, remove_by_id};
use shutterhive_core::repository::{ProductRepository, RepositoryError};

/// An ordered product list held in memory.
///
/// Writers take the lock exclusively, so a reader never sees a half-applied
/// create, update or delete.
#[derive(Debug, Default)]
pub struct InMemoryProducts {
    inner: RwLock<Store>,
}

#[derive(Debug, Default)]
struct Store {
    products: Vec<Product>,
    /// Highest numeric ID ever stored. Only grows.
    last_id: u64,
}

impl Store {
    fn note_id(&mut self, id: &ProductId) {
        if let Ok(n) = id.as_str().parse::<u64>() {
            self.last_id = self.last_id.max(n);
        }
    }
}

impl InMemoryProducts {
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let mut store = Store::default();
        for product in &products {
            store.note_id(product.id());
        }
        store.products = products;
        Self {
            inner: RwLock::new(store),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Store>, RepositoryError> {
        self.inner.read().map_err(poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Store>, RepositoryError> {
        self.inner.write().map_err(poisoned)
    }
}

fn poisoned<T>(_: PoisonError<T>) -> RepositoryError {
    RepositoryError::Unavailable("product store lock poisoned".to_string())
}

impl ProductRepository for InMemoryProducts {
    fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.read()?.products.clone())
    }

    fn get(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.read()?.products.iter().find(|p| p.id() == id).cloned())
    }

    /// Seeded `"1"`..`"8"` continue at `"9"`; a deleted ID is never handed out again.
    fn create(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let mut store = self.write()?;
        store.last_id = store.last_id.saturating_add(1);
        let product = product.with_id(ProductId::new(store.last_id.to_string()));
        store.products.push(product.clone());
        Ok(product)
    }

    fn insert(&self, product: Product) -> Result<(), RepositoryError> {
        let mut store = self.write()?;
        if store.products.iter().any(|p| p.id() == product.id()) {
            return Err(RepositoryError::Conflict {
                entity: "product",
                id: product.id().to_string(),
            });
        }
        store.note_id(product.id());
        store.products.push(product);
        Ok(())
    }

    fn update(&self, product: Product) -> Result<(), RepositoryError> {
        let mut store = self.write()?;
        let slot = store
            .products
            .iter_mut()
            .find(|p| p.id() == product.id())
            .ok_or_else(|| RepositoryError::product_not_found(product.id()))?;
        *slot = product;
        Ok(())
    }

    fn delete(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        let mut store = self.write()?;
        remove_by_id(&mut store.products, id).ok_or_else(|| RepositoryError::product_not_found(id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shutterhive_core::Price;
    use shutterhive_core::catalog::ProductDetails;

    use super::*;

    fn product(id: &str, name: &str, price: u64) -> Product {
        Product::Standard {
            details: ProductDetails {
                id: ProductId::new(id),
                name: name.to_string(),
                image_url: String::new(),
                features: vec!["DSLR Camera".to_string()],
                price: Price::from_rupees(price),
                category: None,
            },
        }
    }

    fn store() -> InMemoryProducts {
        InMemoryProducts::new(vec![
            product("1", "Canon EOS 1500D", 35_000),
            product("2", "Sony Alpha A7 III", 150_000),
            product("3", "Nikon D850", 225_000),
        ])
    }

    fn names(store: &InMemoryProducts) -> Vec<String> {
        store
            .list()
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    #[test]
    fn test_get_known_and_unknown() {
        let store = store();
        assert_eq!(
            store.get(&ProductId::new("2")).unwrap().map(|p| p.price()),
            Some(Price::from_rupees(150_000))
        );
        assert!(store.get(&ProductId::new("42")).unwrap().is_none());
    }

    fn new_product(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            image_url: String::new(),
            features: vec!["Mirrorless Camera".to_string()],
            price: Price::from_rupees(140_000),
            category: None,
            rental_price_per_day: None,
        }
    }

    #[test]
    fn test_create_follows_highest_id() {
        let created = store().create(new_product("Fujifilm X-T4")).unwrap();
        assert_eq!(created.id().as_str(), "4");

        let empty = InMemoryProducts::default();
        assert_eq!(empty.create(new_product("First")).unwrap().id().as_str(), "1");
    }

    #[test]
    fn test_create_after_delete_does_not_reuse_id() {
        let store = store();
        store.delete(&ProductId::new("3")).unwrap();

        let created = store.create(new_product("Fujifilm X-T4")).unwrap();

        assert_eq!(created.id().as_str(), "4");
        assert!(store.get(&ProductId::new("3")).unwrap().is_none());
    }

    #[test]
    fn test_insert_raises_next_id() {
        let store = store();
        store.insert(product("10", "Leica Q2", 450_000)).unwrap();
        assert_eq!(store.create(new_product("Next")).unwrap().id().as_str(), "11");
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let store = std::sync::Arc::new(store());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = std::sync::Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..50)
                        .map(|_| store.create(new_product("Batch")).unwrap().id().clone())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<ProductId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), 400);
        assert_eq!(store.list().unwrap().len(), 403);
    }

    #[test]
    fn test_insert_appends() {
        let store = store();
        store.insert(product("4", "Fujifilm X-T4", 140_000)).unwrap();
        assert_eq!(names(&store).last().map(String::as_str), Some("Fujifilm X-T4"));
    }

    #[test]
    fn test_insert_duplicate_id_conflicts() {
        let err = store().insert(product("1", "Duplicate", 1)).unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict { .. }));
    }

    #[test]
    fn test_update_keeps_position() {
        let store = store();
        store.update(product("2", "Sony Alpha A7 IV", 210_000)).unwrap();
        assert_eq!(
            names(&store),
            ["Canon EOS 1500D", "Sony Alpha A7 IV", "Nikon D850"]
        );
    }

    #[test]
    fn test_update_unknown_is_not_found() {
        let err = store().update(product("9", "Ghost", 1)).unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { entity: "product", .. }));
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let store = store();
        let removed = store.delete(&ProductId::new("2")).unwrap();

        assert_eq!(removed.name(), "Sony Alpha A7 III");
        assert_eq!(names(&store), ["Canon EOS 1500D", "Nikon D850"]);
    }

    #[test]
    fn test_delete_unknown_leaves_list_intact() {
        let store = store();
        assert!(store.delete(&ProductId::new("9")).is_err());
        assert_eq!(store.list().unwrap().len(), 3);
    }
}
