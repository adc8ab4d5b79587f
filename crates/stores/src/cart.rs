//! Shopping cart store: line items, totals, and the checkout flow.
//!
//! The cart owns its line items exclusively. Mutations keep the cached
//! subtotal current so views never recompute totals; all arithmetic is in
//! whole cents.
//!
//! Checkout follows `Shopping -> Placing -> Placed`; the caller returns the
//! store to `Shopping` once the confirmation UI is dismissed.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use cartwheel_core::{CheckoutPhase, Money, OrderNumber, ProductId, ShippingOptionId};

use crate::catalog::{Product, ShippingCatalog, ShippingOption};
use crate::config::SimulatedLatency;
use crate::error::CheckoutError;

/// One product entry in the cart.
///
/// Invariant: `quantity >= 1` while the line is present. An update to
/// quantity 0 deletes the line instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl LineItem {
    /// `unit_price * quantity`, in exact cents.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// Shopping cart store.
///
/// Cheaply cloneable handle over shared state. The shipping catalog is
/// injected at construction and never changes.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<Mutex<CartInner>>,
    catalog: Arc<ShippingCatalog>,
    latency: SimulatedLatency,
}

struct CartInner {
    lines: Vec<LineItem>,
    /// Recomputed on every mutation, never on read.
    subtotal: Money,
    selected_shipping: Option<ShippingOptionId>,
    phase: CheckoutPhase,
    last_order: Option<OrderNumber>,
    /// Order numbers handed out this session; used to guarantee uniqueness.
    issued: HashSet<OrderNumber>,
}

impl CartStore {
    /// Create an empty cart.
    ///
    /// Shipping defaults to the catalog's first (cheapest) option.
    #[must_use]
    pub fn new(catalog: ShippingCatalog, latency: SimulatedLatency) -> Self {
        let selected_shipping = catalog.default_option().map(|o| o.id.clone());
        Self {
            inner: Arc::new(Mutex::new(CartInner {
                lines: Vec::new(),
                subtotal: Money::ZERO,
                selected_shipping,
                phase: CheckoutPhase::Shopping,
                last_order: None,
                issued: HashSet::new(),
            })),
            catalog: Arc::new(catalog),
            latency,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add one unit of a product.
    ///
    /// An existing line for the same product id is incremented; otherwise a
    /// new line with quantity 1 is inserted. Always succeeds.
    pub fn add_item(&self, product: &Product) {
        let mut inner = self.inner.lock();
        if let Some(line) = inner.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity += 1;
        } else {
            inner.lines.push(LineItem {
                product_id: product.id.clone(),
                name: product.name.clone(),
                unit_price: product.price,
                quantity: 1,
            });
        }
        inner.recompute_subtotal();
        debug!(product = %product.id, "added to cart");
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of 0 removes the line. An unknown product id is ignored
    /// and never creates an entry.
    pub fn update_quantity(&self, product_id: &ProductId, quantity: u32) {
        let mut inner = self.inner.lock();
        let Some(index) = inner.lines.iter().position(|l| &l.product_id == product_id) else {
            debug!(product = %product_id, "quantity update for unknown product ignored");
            return;
        };
        if quantity == 0 {
            inner.lines.remove(index);
        } else if let Some(line) = inner.lines.get_mut(index) {
            line.quantity = quantity;
        }
        inner.recompute_subtotal();
    }

    /// Remove a line entirely. No-op for an unknown product id.
    pub fn remove_item(&self, product_id: &ProductId) {
        let mut inner = self.inner.lock();
        let before = inner.lines.len();
        inner.lines.retain(|l| &l.product_id != product_id);
        if inner.lines.len() == before {
            debug!(product = %product_id, "removal of unknown product ignored");
            return;
        }
        inner.recompute_subtotal();
    }

    /// Select a shipping option by id.
    ///
    /// Ids not present in the catalog are ignored.
    pub fn select_shipping(&self, option_id: &ShippingOptionId) {
        if !self.catalog.contains(option_id) {
            warn!(option = %option_id, "unknown shipping option ignored");
            return;
        }
        self.inner.lock().selected_shipping = Some(option_id.clone());
    }

    /// Return a placed cart to the shopping phase.
    ///
    /// Invoked by the caller after the order confirmation is dismissed;
    /// ignored in any other phase.
    pub fn resume_shopping(&self) {
        let mut inner = self.inner.lock();
        if inner.phase == CheckoutPhase::Placed {
            inner.phase = CheckoutPhase::Shopping;
        } else {
            debug!(phase = ?inner.phase, "resume_shopping outside Placed ignored");
        }
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Place the order.
    ///
    /// Validates that the cart is non-empty, waits for the simulated
    /// latency, then clears all lines, records a session-unique order
    /// number, and enters [`CheckoutPhase::Placed`].
    ///
    /// While a checkout is in flight, re-invocation is a no-op returning
    /// `Ok(None)`; exactly one confirmation is ever produced per submission.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if there are no line items.
    #[instrument(skip(self))]
    pub async fn checkout(&self) -> Result<Option<OrderNumber>, CheckoutError> {
        {
            let mut inner = self.inner.lock();
            if inner.phase == CheckoutPhase::Placing {
                debug!("checkout already in flight, ignoring");
                return Ok(None);
            }
            if inner.lines.is_empty() {
                return Err(CheckoutError::EmptyCart);
            }
            inner.phase = CheckoutPhase::Placing;
        }

        self.latency.wait().await;

        let mut inner = self.inner.lock();
        let number = inner.next_order_number();
        inner.lines.clear();
        inner.recompute_subtotal();
        inner.phase = CheckoutPhase::Placed;
        inner.last_order = Some(number.clone());
        info!(order = %number, "order placed");
        Ok(Some(number))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Snapshot of the current line items.
    #[must_use]
    pub fn lines(&self) -> Vec<LineItem> {
        self.inner.lock().lines.clone()
    }

    /// Total unit count across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.inner.lock().lines.iter().map(|l| l.quantity).sum()
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().lines.is_empty()
    }

    /// Sum of `unit_price * quantity` over all lines, in exact cents.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.inner.lock().subtotal
    }

    /// Price of the selected shipping option; zero for an empty cart.
    #[must_use]
    pub fn shipping_cost(&self) -> Money {
        let inner = self.inner.lock();
        if inner.lines.is_empty() {
            return Money::ZERO;
        }
        inner
            .selected_shipping
            .as_ref()
            .and_then(|id| self.catalog.get(id))
            .map_or(Money::ZERO, |o| o.price)
    }

    /// `subtotal + shipping_cost`.
    #[must_use]
    pub fn total(&self) -> Money {
        self.subtotal() + self.shipping_cost()
    }

    /// Current checkout phase.
    #[must_use]
    pub fn phase(&self) -> CheckoutPhase {
        self.inner.lock().phase
    }

    /// Whether an order was just placed (awaiting dismissal).
    #[must_use]
    pub fn order_placed(&self) -> bool {
        self.phase() == CheckoutPhase::Placed
    }

    /// Confirmation number of the most recently placed order.
    #[must_use]
    pub fn last_order(&self) -> Option<OrderNumber> {
        self.inner.lock().last_order.clone()
    }

    /// The currently selected shipping option.
    #[must_use]
    pub fn selected_shipping(&self) -> Option<ShippingOption> {
        let inner = self.inner.lock();
        inner
            .selected_shipping
            .as_ref()
            .and_then(|id| self.catalog.get(id))
            .cloned()
    }

    /// The injected shipping catalog.
    #[must_use]
    pub fn catalog(&self) -> &ShippingCatalog {
        &self.catalog
    }
}

impl CartInner {
    fn recompute_subtotal(&mut self) {
        self.subtotal = self.lines.iter().map(LineItem::line_total).sum();
    }

    /// Generate an order number not yet handed out this session.
    fn next_order_number(&mut self) -> OrderNumber {
        loop {
            let hex = Uuid::new_v4().simple().to_string();
            let short: String = hex.chars().take(10).collect::<String>().to_uppercase();
            let number = OrderNumber::new(format!("CW-{short}"));
            if self.issued.insert(number.clone()) {
                return number;
            }
        }
    }
}
