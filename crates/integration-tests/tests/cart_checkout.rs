//! Integration tests for the cart store and checkout lifecycle.

use std::time::Duration;

use cartwheel_core::{CheckoutPhase, Money};
use cartwheel_integration_tests::instant_cart;
use cartwheel_stores::config::SimulatedLatency;
use cartwheel_stores::error::CheckoutError;
use cartwheel_stores::{CartStore, Product, ShippingCatalog};

fn tea() -> Product {
    Product::new("green-tea", "Green Tea", Money::from_cents(1000))
}

fn honey() -> Product {
    Product::new("raw-honey", "Raw Honey", Money::from_cents(2550))
}

// =============================================================================
// Totals
// =============================================================================

#[test]
fn test_subtotal_matches_line_sum_after_any_sequence() {
    let cart = instant_cart();

    cart.add_item(&tea());
    cart.add_item(&honey());
    cart.add_item(&tea());
    cart.update_quantity(&"raw-honey".into(), 4);
    cart.remove_item(&"green-tea".into());
    cart.add_item(&tea());
    cart.update_quantity(&"green-tea".into(), 7);

    let expected: Money = cart.lines().iter().map(|l| l.unit_price * l.quantity).sum();
    assert_eq!(cart.subtotal(), expected);
    assert_eq!(cart.subtotal(), Money::from_cents(4 * 2550 + 7 * 1000));
}

#[test]
fn test_free_shipping_scenario() {
    // 10.00 x2 + 25.50 x1 on the free tier
    let cart = instant_cart();
    cart.add_item(&tea());
    cart.add_item(&tea());
    cart.add_item(&honey());
    cart.select_shipping(&"free".into());

    assert_eq!(cart.subtotal().to_string(), "$45.50");
    assert_eq!(cart.shipping_cost(), Money::ZERO);
    assert_eq!(cart.total().to_string(), "$45.50");
}

#[test]
fn test_paid_shipping_included_in_total() {
    let cart = instant_cart();
    cart.add_item(&tea());
    cart.select_shipping(&"overnight".into());

    assert_eq!(cart.total(), Money::from_cents(1000 + 1999));
}

// =============================================================================
// Checkout Lifecycle
// =============================================================================

#[tokio::test]
async fn test_full_checkout_cycle_returns_to_shopping() {
    let cart = instant_cart();
    cart.add_item(&tea());
    assert_eq!(cart.phase(), CheckoutPhase::Shopping);

    let number = cart.checkout().await.expect("non-empty cart").expect("no in-flight checkout");
    assert_eq!(cart.phase(), CheckoutPhase::Placed);
    assert!(cart.is_empty());
    assert_eq!(cart.last_order(), Some(number));

    // The caller dismisses the confirmation and shopping resumes
    cart.resume_shopping();
    assert_eq!(cart.phase(), CheckoutPhase::Shopping);

    // Shipping selection survives the order
    assert!(cart.selected_shipping().is_some());
}

#[tokio::test]
async fn test_empty_cart_checkout_is_rejected() {
    let cart = instant_cart();
    assert_eq!(cart.checkout().await, Err(CheckoutError::EmptyCart));

    // Rejection leaves the store usable
    cart.add_item(&tea());
    assert!(cart.checkout().await.expect("non-empty cart").is_some());
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_checkouts_confirm_exactly_once() {
    let cart = CartStore::new(
        ShippingCatalog::standard(),
        SimulatedLatency::fixed(Duration::from_millis(200)),
    );
    cart.add_item(&tea());
    cart.add_item(&honey());

    let clone = cart.clone();
    let (a, b, c) = tokio::join!(cart.checkout(), clone.checkout(), cart.checkout());

    let confirmations: Vec<_> = [a, b, c]
        .into_iter()
        .filter_map(|r| r.expect("non-empty cart"))
        .collect();
    assert_eq!(confirmations.len(), 1);
    assert!(cart.is_empty());
    assert_eq!(cart.phase(), CheckoutPhase::Placed);
}

#[tokio::test]
async fn test_orders_across_session_are_distinct() {
    let cart = instant_cart();
    let mut seen = std::collections::HashSet::new();

    for _ in 0..5 {
        cart.add_item(&tea());
        let number = cart.checkout().await.expect("non-empty cart").expect("no in-flight checkout");
        assert!(seen.insert(number), "confirmation numbers must be unique");
        cart.resume_shopping();
    }
}
