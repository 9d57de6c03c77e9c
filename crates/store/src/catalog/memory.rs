//! In-memory product repository.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use summit_outfitters_core::ProductId;

use super::{Product, ProductRepository, RepositoryError};

/// In-memory catalog store.
///
/// Backs local development and the test suites with the same contract as a
/// database-backed implementation. Cloning shares the underlying catalog.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    state: Arc<RwLock<CatalogState>>,
}

#[derive(Default)]
struct CatalogState {
    products: Vec<Product>,
    last_id: i32,
}

impl CatalogState {
    fn allocate_id(&mut self) -> ProductId {
        self.last_id += 1;
        ProductId::new(self.last_id)
    }
}

impl InMemoryProductRepository {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog seeded with `products`.
    ///
    /// Unassigned identities are assigned in insertion order; products that
    /// arrive with an identity keep it.
    #[must_use]
    pub fn with_products(products: Vec<Product>) -> Self {
        let mut state = CatalogState::default();
        for mut product in products {
            if product.id.is_assigned() {
                state.last_id = state.last_id.max(product.id.as_i32());
            } else {
                product.id = state.allocate_id();
            }
            state.products.push(product);
        }
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Number of products currently held.
    pub async fn product_count(&self) -> usize {
        self.state.read().await.products.len()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn products(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.state.read().await.products.clone())
    }

    async fn save_product(&self, mut product: Product) -> Result<Product, RepositoryError> {
        let mut state = self.state.write().await;

        if !product.id.is_assigned() {
            product.id = state.allocate_id();
            state.products.push(product.clone());
            return Ok(product);
        }

        if let Some(existing) = state.products.iter_mut().find(|p| p.id == product.id) {
            existing.name = product.name;
            existing.description = product.description;
            existing.price = product.price;
            existing.category = product.category;
            // Image bytes are managed by the upload path and survive field
            // edits.
            return Ok(existing.clone());
        }

        // Unknown identity: store nothing, same benign posture as delete.
        Ok(product)
    }

    async fn delete_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let mut state = self.state.write().await;
        let position = state.products.iter().position(|p| p.id == id);
        Ok(position.map(|index| state.products.remove(index)))
    }

    async fn find_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .state
            .read()
            .await
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }
}
