//! Product catalog types and the repository contract.
//!
//! The catalog store is shared across all sessions and owns every
//! [`Product`]; carts and admin flows only reach it through
//! [`ProductRepository`]. The transaction and locking discipline of the
//! backing store is the implementation's concern, this module defines the
//! read/write contract only.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use summit_outfitters_core::{Price, ProductId};

pub mod memory;

pub use memory::InMemoryProductRepository;

/// Image payload attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    /// Raw image bytes.
    pub data: Vec<u8>,
    /// MIME type captured when the image was uploaded.
    pub mime_type: String,
}

/// A catalog item.
///
/// Products are immutable from the cart's perspective; the cart keeps
/// snapshots and never writes back. Two product values describe the same
/// line-item subject iff their `id`s are equal - the other fields carry no
/// identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identity; [`ProductId::UNASSIGNED`] until first saved.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Category the product is browsed under.
    pub category: String,
    /// Optional image payload.
    pub image: Option<ProductImage>,
}

impl Product {
    /// A new, not-yet-persisted product.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            id: ProductId::UNASSIGNED,
            name: name.into(),
            description: String::new(),
            price,
            category: String::new(),
            image: None,
        }
    }

    /// Set the catalog identity.
    #[must_use]
    pub const fn with_id(mut self, id: ProductId) -> Self {
        self.id = id;
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Attach an image payload.
    #[must_use]
    pub fn with_image(mut self, data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        self.image = Some(ProductImage {
            data,
            mime_type: mime_type.into(),
        });
        self
    }
}

/// Error from a catalog store.
///
/// Missing records are not errors; lookups return `None` and removals are
/// idempotent.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The backing store failed or was unreachable.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Capability boundary for catalog reads and admin writes.
///
/// The cart depends on this only to resolve a [`Product`] by identity when
/// adding to cart; the mutation operations exist for admin flows.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// The full catalog.
    async fn products(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Upsert a product and return the stored record.
    ///
    /// A [`ProductId::UNASSIGNED`] identity inserts the product and assigns
    /// a fresh identity. Otherwise the record with a matching identity gets
    /// its name, description, price, and category rewritten; image fields
    /// are managed by a separate upload path and are never overwritten here.
    /// Updating an identity the catalog does not hold stores nothing and
    /// hands the product back unchanged.
    async fn save_product(&self, product: Product) -> Result<Product, RepositoryError>;

    /// Remove the product with the given identity, returning the removed
    /// record.
    ///
    /// Idempotent: an identity the catalog does not hold yields `None`, not
    /// an error.
    async fn delete_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    /// Resolve a product by identity.
    async fn find_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.products().await?.into_iter().find(|p| p.id == id))
    }

    /// The image payload for a product.
    ///
    /// `None` for unknown identities and for products without an image.
    async fn product_image(&self, id: ProductId) -> Result<Option<ProductImage>, RepositoryError> {
        Ok(self.find_product(id).await?.and_then(|p| p.image))
    }
}
