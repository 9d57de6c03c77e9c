//! Summit Outfitters Store - storefront domain library.
//!
//! This crate holds the domain logic behind the Summit Outfitters
//! storefront: the product catalog and its repository contract, the
//! per-session shopping cart, and the checkout workflow that hands a
//! validated cart to the order processor.
//!
//! # Architecture
//!
//! Web, persistence, and identity surfaces live behind narrow capability
//! traits ([`ProductRepository`], [`OrderProcessor`], [`AuthProvider`]) that
//! callers inject explicitly - there is no container or global wiring. The
//! capability traits are async because their production implementations do
//! I/O; the cart itself is a synchronous in-memory aggregate owned by a
//! single session.
//!
//! # Modules
//!
//! - [`catalog`] - Product records, the repository contract, and the
//!   in-memory store
//! - [`cart`] - The per-session cart aggregate
//! - [`checkout`] - Shipping details and the submission state machine
//! - [`orders`] - The order-processor contract and in-memory processor
//! - [`auth`] - The authentication capability consumed by admin flows
//! - [`validation`] - Field-level validation reported as values

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;
pub mod validation;

pub use auth::{AuthError, AuthProvider, Credentials};
pub use cart::{Cart, CartLine};
pub use catalog::{
    InMemoryProductRepository, Product, ProductImage, ProductRepository, RepositoryError,
};
pub use checkout::{CheckoutError, CheckoutState, CheckoutWorkflow, ShippingDetails};
pub use orders::{
    InMemoryOrderProcessor, OrderConfirmation, OrderError, OrderProcessor, OrderReference,
    PlacedOrder,
};
pub use validation::ValidationError;
