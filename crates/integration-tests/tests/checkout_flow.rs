//! End-to-end storefront flow: browse the catalog, fill a cart, check out.

use std::sync::Arc;

use summit_outfitters_core::ProductId;
use summit_outfitters_store::{
    Cart, CheckoutError, CheckoutState, CheckoutWorkflow, InMemoryOrderProcessor, ProductRepository,
    ShippingDetails,
};

use summit_outfitters_integration_tests::{init_tracing, seed_catalog};

fn valid_shipping() -> ShippingDetails {
    ShippingDetails {
        name: "Robin Larsen".to_owned(),
        line1: "1 Fjellveien".to_owned(),
        city: "Bergen".to_owned(),
        state: "Vestland".to_owned(),
        country: "Norway".to_owned(),
        gift_wrap: true,
        ..ShippingDetails::default()
    }
}

#[tokio::test]
async fn test_catalog_to_completed_order() {
    init_tracing();
    let catalog = seed_catalog();
    let processor = InMemoryOrderProcessor::new();

    // Resolve products through the repository, the way an add-to-cart
    // action would.
    let kayak = catalog
        .find_product(ProductId::new(1))
        .await
        .expect("lookup")
        .expect("kayak is seeded");
    let lifejacket = catalog
        .find_product(ProductId::new(2))
        .await
        .expect("lookup")
        .expect("lifejacket is seeded");

    let mut cart = Cart::new();
    cart.add_item(kayak.clone(), 1);
    cart.add_item(lifejacket, 2);
    cart.add_item(kayak, 1); // merges into the first line

    assert_eq!(cart.lines().len(), 2);
    assert_eq!(cart.item_count(), 4);
    // 2 x 275.00 + 2 x 48.95
    assert_eq!(cart.total_value().display(), "$647.90");

    let mut workflow = CheckoutWorkflow::new(Arc::new(processor.clone()));
    let confirmation = workflow
        .submit(&cart, &valid_shipping())
        .await
        .expect("submission should succeed");
    assert_eq!(workflow.state(), CheckoutState::Completed);

    let orders = processor.orders().await;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].reference, confirmation.reference);
    assert_eq!(orders[0].total.display(), "$647.90");
    assert_eq!(orders[0].lines.len(), 2);
    assert!(orders[0].shipping.gift_wrap);

    // Post-order cleanup belongs to the caller, not the workflow.
    cart.clear();
    assert!(cart.is_empty());
}

#[tokio::test]
async fn test_empty_cart_never_reaches_the_processor() {
    init_tracing();
    let processor = InMemoryOrderProcessor::new();
    let mut workflow = CheckoutWorkflow::new(Arc::new(processor.clone()));

    let result = workflow.submit(&Cart::new(), &valid_shipping()).await;

    let Err(CheckoutError::Validation(errors)) = result else {
        panic!("expected a validation rejection");
    };
    assert_eq!(errors[0].message, "cart is empty");
    assert_eq!(processor.order_count().await, 0);
}

#[tokio::test]
async fn test_processor_outage_leaves_checkout_retryable() {
    init_tracing();
    let catalog = seed_catalog();
    let processor = InMemoryOrderProcessor::new();

    let product = catalog
        .find_product(ProductId::new(3))
        .await
        .expect("lookup")
        .expect("trail runners are seeded");
    let mut cart = Cart::new();
    cart.add_item(product, 1);

    let mut workflow = CheckoutWorkflow::new(Arc::new(processor.clone()));

    processor.set_fail_on_process(true).await;
    let outcome = workflow.submit(&cart, &valid_shipping()).await;
    assert!(matches!(outcome, Err(CheckoutError::Order(_))));
    assert_eq!(workflow.state(), CheckoutState::AwaitingSubmission);
    assert_eq!(processor.order_count().await, 0);
    // The cart is untouched by the failed attempt.
    assert_eq!(cart.item_count(), 1);

    processor.set_fail_on_process(false).await;
    workflow
        .submit(&cart, &valid_shipping())
        .await
        .expect("retry should succeed");
    assert_eq!(workflow.state(), CheckoutState::Completed);
    assert_eq!(processor.order_count().await, 1);
}

#[tokio::test]
async fn test_cart_survives_a_session_store_round_trip() {
    init_tracing();
    let catalog = seed_catalog();

    let kayak = catalog
        .find_product(ProductId::new(1))
        .await
        .expect("lookup")
        .expect("kayak is seeded");
    let mut cart = Cart::new();
    cart.add_item(kayak, 3);

    // The session layer persists the cart between requests as JSON.
    let stored = serde_json::to_string(&cart).expect("serialize");
    let restored: Cart = serde_json::from_str(&stored).expect("deserialize");

    assert_eq!(restored.lines(), cart.lines());
    assert_eq!(restored.total_value(), cart.total_value());
    assert_eq!(restored.total_value().display(), "$825.00");
}
