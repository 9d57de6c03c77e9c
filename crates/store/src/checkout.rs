//! Checkout workflow: validation + submission bridging a cart to the order
//! processor.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::cart::Cart;
use crate::orders::{OrderConfirmation, OrderError, OrderProcessor};
use crate::validation::{ValidationError, require_present};

/// Shipping details captured at checkout.
///
/// A plain value bag; [`ShippingDetails::validate`] checks field presence
/// only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetails {
    /// Recipient name.
    pub name: String,
    /// First address line.
    pub line1: String,
    /// Second address line.
    pub line2: Option<String>,
    /// Third address line.
    pub line3: Option<String>,
    /// City.
    pub city: String,
    /// State or region.
    pub state: String,
    /// Postal code.
    pub zip: Option<String>,
    /// Country.
    pub country: String,
    /// Whether to gift-wrap the order.
    pub gift_wrap: bool,
}

impl ShippingDetails {
    /// Presence validation for the required fields.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        require_present(&mut errors, "name", &self.name);
        require_present(&mut errors, "line1", &self.line1);
        require_present(&mut errors, "city", &self.city);
        require_present(&mut errors, "state", &self.state);
        require_present(&mut errors, "country", &self.country);
        errors
    }
}

/// Where a checkout stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutState {
    /// Waiting for the shopper to submit, including after a rejection.
    AwaitingSubmission,
    /// The order processor accepted the order.
    Completed,
}

/// Checkout failure.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The submission was rejected; the shopper may correct and resubmit.
    #[error("checkout rejected with {} validation error(s)", .0.len())]
    Validation(Vec<ValidationError>),
    /// The order processor failed; propagated unchanged.
    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Validation + submission state machine for one order.
///
/// Create a workflow per checkout. Submission validates the cart and
/// shipping details, then delegates to the injected [`OrderProcessor`]. The
/// workflow never clears the cart - post-order cleanup belongs to the
/// orchestrating caller.
pub struct CheckoutWorkflow {
    processor: Arc<dyn OrderProcessor>,
    state: CheckoutState,
}

impl CheckoutWorkflow {
    /// Create a workflow awaiting its first submission.
    #[must_use]
    pub fn new(processor: Arc<dyn OrderProcessor>) -> Self {
        Self {
            processor,
            state: CheckoutState::AwaitingSubmission,
        }
    }

    /// Current workflow state.
    #[must_use]
    pub const fn state(&self) -> CheckoutState {
        self.state
    }

    /// Validate and submit the order.
    ///
    /// An empty cart or missing shipping fields reject the submission and
    /// leave the workflow awaiting resubmission; the order processor is not
    /// consulted. A processor failure propagates unchanged and also leaves
    /// the workflow retryable.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::Validation`] with field/message pairs on rejection;
    /// [`CheckoutError::Order`] when the order processor fails.
    #[instrument(
        skip_all,
        fields(lines = cart.lines().len(), items = cart.item_count())
    )]
    pub async fn submit(
        &mut self,
        cart: &Cart,
        shipping: &ShippingDetails,
    ) -> Result<OrderConfirmation, CheckoutError> {
        if cart.is_empty() {
            warn!("checkout rejected: empty cart");
            return Err(CheckoutError::Validation(vec![ValidationError::new(
                "cart",
                "cart is empty",
            )]));
        }

        let errors = shipping.validate();
        if !errors.is_empty() {
            warn!(errors = errors.len(), "checkout rejected: shipping details");
            return Err(CheckoutError::Validation(errors));
        }

        let confirmation = self.processor.process_order(cart, shipping).await?;
        self.state = CheckoutState::Completed;
        info!(
            reference = %confirmation.reference,
            total = %cart.total_value().display(),
            "order placed"
        );
        Ok(confirmation)
    }
}
