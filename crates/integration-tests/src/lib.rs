//! Integration tests for Summit Outfitters.
//!
//! Cross-crate scenarios wired the way a real deployment would be, with the
//! in-memory repository and order processor standing in for the external
//! collaborators. Shared fixtures live here; the scenarios are under
//! `tests/`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p summit-outfitters-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use async_trait::async_trait;

use summit_outfitters_core::{CurrencyCode, Price};
use summit_outfitters_store::{
    AuthError, AuthProvider, Credentials, InMemoryProductRepository, Product,
};

/// Install a subscriber honoring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A small catalog in the store's default currency.
#[must_use]
pub fn seed_catalog() -> InMemoryProductRepository {
    let usd = CurrencyCode::USD;
    InMemoryProductRepository::with_products(vec![
        Product::new("Kayak", Price::from_cents(27500, usd))
            .with_category("Watersports")
            .with_description("A boat for one person"),
        Product::new("Lifejacket", Price::from_cents(4895, usd))
            .with_category("Watersports")
            .with_image(vec![0x89, 0x50, 0x4E, 0x47], "image/png"),
        Product::new("Trail runners", Price::from_cents(9500, usd)).with_category("Footwear"),
    ])
}

/// Auth provider double backed by a single known credential pair.
pub struct StaticAuthProvider {
    username: String,
    password: String,
}

impl StaticAuthProvider {
    /// Provider accepting exactly this credential pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[async_trait]
impl AuthProvider for StaticAuthProvider {
    async fn authenticate(&self, credentials: &Credentials) -> Result<bool, AuthError> {
        Ok(credentials.username == self.username && credentials.password == self.password)
    }
}
