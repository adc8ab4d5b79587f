//! Scripted shopping session against a live cart store.
//!
//! Exercises the full cart flow: add items, change quantities, pick a
//! shipping tier, and check out. Latency comes from the environment
//! configuration, so the in-flight phase is observable in the logs.

use std::time::Duration;

use tracing::info;

use cartwheel_core::{Money, ToastKind};
use cartwheel_stores::{
    CartStore, Product, ShippingCatalog, StoreConfig, ToastOptions, ToastStore,
};

/// Errors that can occur during the demo session.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] cartwheel_stores::config::ConfigError),

    /// Checkout was rejected.
    #[error("Checkout error: {0}")]
    Checkout(#[from] cartwheel_stores::CheckoutError),
}

/// Run the scripted session.
///
/// # Errors
///
/// Returns an error if configuration loading or checkout fails.
pub async fn run() -> Result<(), DemoError> {
    let config = StoreConfig::from_env()?;
    let cart = CartStore::new(ShippingCatalog::standard(), config.checkout_latency);

    let tea = Product::new("green-tea", "Green Tea", Money::from_cents(1000));
    let honey = Product::new("raw-honey", "Raw Honey", Money::from_cents(2550));

    cart.add_item(&tea);
    cart.add_item(&tea);
    cart.add_item(&honey);
    info!("cart: {} items, subtotal {}", cart.item_count(), cart.subtotal());

    cart.update_quantity(&tea.id, 3);
    cart.select_shipping(&"express".into());
    for line in cart.lines() {
        info!(
            "  {} x{} @ {} = {}",
            line.name,
            line.quantity,
            line.unit_price,
            line.line_total()
        );
    }
    if let Some(shipping) = cart.selected_shipping() {
        info!(
            "shipping: {} ({}) {}",
            shipping.name, shipping.estimated_delivery, shipping.price
        );
    }
    info!(
        "subtotal {} + shipping {} = total {}",
        cart.subtotal(),
        cart.shipping_cost(),
        cart.total()
    );

    info!("placing order...");
    let toasts = ToastStore::new();
    let confirmation = cart.checkout().await?;
    match confirmation {
        Some(number) => {
            toasts.show(
                format!("Order {number} confirmed"),
                ToastKind::Success,
                ToastOptions::lasting(Duration::from_millis(500)),
            );
            info!("order confirmed: {number}");
        }
        None => info!("checkout already in flight"),
    }

    for toast in toasts.toasts() {
        info!("toast [{:?}] {}", toast.kind, toast.message);
    }
    tokio::time::sleep(Duration::from_millis(600)).await;
    info!("toasts remaining after expiry: {}", toasts.len());

    cart.resume_shopping();
    info!("cart cleared, back to shopping");

    Ok(())
}
