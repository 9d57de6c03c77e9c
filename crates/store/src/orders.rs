//! Order processing contract and the in-memory processor.
//!
//! The order processor is the capability boundary that commits a validated
//! cart + shipping combination into an order. How an order is committed
//! (persistence, confirmation email) is the implementation's concern; the
//! checkout workflow only sees [`OrderProcessor`].

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use summit_outfitters_core::Price;

use crate::cart::{Cart, CartLine};
use crate::checkout::ShippingDetails;

/// Reference assigned to a committed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderReference(Uuid);

impl OrderReference {
    /// Assign a fresh reference.
    #[must_use]
    pub fn assign() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for OrderReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error from the order processor.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The downstream order service could not commit the order.
    #[error("order processing failed: {0}")]
    Processing(String),
}

/// Confirmation returned once an order is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Reference the shopper can quote.
    pub reference: OrderReference,
    /// When the order was committed.
    pub placed_at: DateTime<Utc>,
}

/// Capability that commits a validated cart + shipping combination.
#[async_trait]
pub trait OrderProcessor: Send + Sync {
    /// Commit an order for the cart's lines, shipped per `shipping`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError`] when the downstream service cannot commit the
    /// order. No retry is attempted here.
    async fn process_order(
        &self,
        cart: &Cart,
        shipping: &ShippingDetails,
    ) -> Result<OrderConfirmation, OrderError>;
}

/// A committed order, as recorded by [`InMemoryOrderProcessor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedOrder {
    /// Assigned reference.
    pub reference: OrderReference,
    /// Shipping details as submitted.
    pub shipping: ShippingDetails,
    /// Cart lines at commit time.
    pub lines: Vec<CartLine>,
    /// Cart total at commit time.
    pub total: Price,
    /// Commit timestamp.
    pub placed_at: DateTime<Utc>,
}

#[derive(Default)]
struct OrderLog {
    orders: Vec<PlacedOrder>,
    fail_on_process: bool,
}

/// In-memory order processor.
///
/// Records committed orders for inspection; the failure toggle drives the
/// downstream-failure paths in tests. Cloning shares the underlying log.
#[derive(Clone, Default)]
pub struct InMemoryOrderProcessor {
    state: Arc<RwLock<OrderLog>>,
}

impl InMemoryOrderProcessor {
    /// Create a processor with an empty order log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `process_order` calls fail (or succeed again).
    pub async fn set_fail_on_process(&self, fail: bool) {
        self.state.write().await.fail_on_process = fail;
    }

    /// Number of orders committed so far.
    pub async fn order_count(&self) -> usize {
        self.state.read().await.orders.len()
    }

    /// Snapshot of the committed orders.
    pub async fn orders(&self) -> Vec<PlacedOrder> {
        self.state.read().await.orders.clone()
    }
}

#[async_trait]
impl OrderProcessor for InMemoryOrderProcessor {
    async fn process_order(
        &self,
        cart: &Cart,
        shipping: &ShippingDetails,
    ) -> Result<OrderConfirmation, OrderError> {
        let mut log = self.state.write().await;
        if log.fail_on_process {
            return Err(OrderError::Processing("order log unavailable".to_owned()));
        }

        let order = PlacedOrder {
            reference: OrderReference::assign(),
            shipping: shipping.clone(),
            lines: cart.lines().to_vec(),
            total: cart.total_value(),
            placed_at: Utc::now(),
        };
        let confirmation = OrderConfirmation {
            reference: order.reference,
            placed_at: order.placed_at,
        };

        info!(
            reference = %order.reference,
            lines = order.lines.len(),
            total = %order.total.display(),
            "order committed"
        );
        log.orders.push(order);

        Ok(confirmation)
    }
}
