use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Persistence boundary for products.
///
/// "Not found" is reported as `None`/`false`, never as an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// All products ordered by id
    async fn list(&self) -> ProductResult<Vec<Product>>;

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Invert `availability` and return the updated product
    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>>;

    /// `true` if a row was removed
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    products: BTreeMap<i32, Product>,
    last_id: i32,
}

/// In-memory implementation for development and tests
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        store.last_id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| ProductError::Internal("product id sequence exhausted".to_string()))?;
        let product = Product::new(store.last_id, input);
        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;

        let Some(product) = store.products.get_mut(&id) else {
            return Ok(None);
        };
        product.apply_update(input);

        tracing::info!(product_id = id, "Updated product");
        Ok(Some(product.clone()))
    }

    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;

        let Some(product) = store.products.get_mut(&id) else {
            return Ok(None);
        };
        product.toggle_availability();

        tracing::info!(product_id = id, availability = product.availability, "Toggled product availability");
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        let removed = store.products.remove(&id).is_some();
        if removed {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(removed)
    }
}

/// Stand-in used when the data store could not be reached at startup.
///
/// Every operation fails, so requests get a 500 instead of a panic.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableProductRepository;

impl UnavailableProductRepository {
    fn unavailable<T>() -> ProductResult<T> {
        Err(ProductError::Internal("database unavailable".to_string()))
    }
}

#[async_trait]
impl ProductRepository for UnavailableProductRepository {
    async fn create(&self, _input: CreateProduct) -> ProductResult<Product> {
        Self::unavailable()
    }

    async fn get_by_id(&self, _id: i32) -> ProductResult<Option<Product>> {
        Self::unavailable()
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        Self::unavailable()
    }

    async fn update(&self, _id: i32, _input: UpdateProduct) -> ProductResult<Option<Product>> {
        Self::unavailable()
    }

    async fn toggle_availability(&self, _id: i32) -> ProductResult<Option<Product>> {
        Self::unavailable()
    }

    async fn delete(&self, _id: i32) -> ProductResult<bool> {
        Self::unavailable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, price: f64) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            price,
            availability: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(create("Monitor", 300.0)).await.unwrap();
        let second = repo.create(create("Teclado", 50.0)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.availability);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(create("Monitor", 300.0)).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());

        let second = repo.create(create("Teclado", 50.0)).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = InMemoryProductRepository::new();
        for name in ["c", "a", "b"] {
            repo.create(create(name, 1.0)).await.unwrap();
        }

        let ids: Vec<i32> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[tokio::test]
    async fn test_update_missing_product_returns_none() {
        let repo = InMemoryProductRepository::new();
        let update = UpdateProduct {
            name: "Nada".to_string(),
            price: 1.0,
            availability: None,
        };

        assert!(repo.update(99, update).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(create("Monitor", 300.0)).await.unwrap();

        let updated = repo
            .update(
                created.id,
                UpdateProduct {
                    name: "Monitor 4K".to_string(),
                    price: 450.0,
                    availability: Some(false),
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Monitor 4K");
        assert_eq!(updated.price, 450.0);
        assert!(!updated.availability);
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_toggle_availability_twice_restores_value() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(create("Monitor", 300.0)).await.unwrap();

        let toggled = repo.toggle_availability(created.id).await.unwrap().unwrap();
        assert!(!toggled.availability);

        let restored = repo.toggle_availability(created.id).await.unwrap().unwrap();
        assert!(restored.availability);
        assert!(repo.toggle_availability(404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_product_returns_false() {
        let repo = InMemoryProductRepository::new();
        assert!(!repo.delete(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_unavailable_repository_fails_every_operation() {
        let repo = UnavailableProductRepository;

        assert!(matches!(repo.list().await, Err(ProductError::Internal(_))));
        assert!(matches!(repo.get_by_id(1).await, Err(ProductError::Internal(_))));
        assert!(matches!(repo.delete(1).await, Err(ProductError::Internal(_))));
    }
}
