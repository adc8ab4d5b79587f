//! Error types for the state layer.
//!
//! Invalid mutations (unknown product or shipping ids) are silently ignored
//! rather than surfaced, so the error surface here is deliberately small:
//! nothing in this layer is fatal, and every failure is recoverable by
//! retrying the user action.

use thiserror::Error;

/// Errors from the checkout flow.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutError {
    /// Checkout was requested with no line items in the cart.
    #[error("cannot check out an empty cart")]
    EmptyCart,
}
