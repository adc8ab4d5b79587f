//! Read-only product and shipping catalogs.
//!
//! Catalogs are supplied by the data layer and never change at runtime. The
//! cart store treats products as opaque inputs and resolves shipping prices
//! through an immutable lookup table.

use cartwheel_core::{Money, ProductId, ShippingOptionId};
use serde::{Deserialize, Serialize};

/// A purchasable product, as handed to the cart store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// A delivery tier with a price and an estimated delivery window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingOption {
    pub id: ShippingOptionId,
    pub name: String,
    /// Display string, e.g. "5-7 business days".
    pub estimated_delivery: String,
    pub price: Money,
}

impl ShippingOption {
    /// Create a new shipping option.
    #[must_use]
    pub fn new(
        id: impl Into<ShippingOptionId>,
        name: impl Into<String>,
        estimated_delivery: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            estimated_delivery: estimated_delivery.into(),
            price,
        }
    }
}

/// Immutable lookup table of shipping options.
///
/// Options are ordered cheapest first; the first entry is the default
/// selection for a new cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingCatalog {
    options: Vec<ShippingOption>,
}

impl ShippingCatalog {
    /// Create a catalog from a list of options, ordered cheapest first.
    #[must_use]
    pub fn new(mut options: Vec<ShippingOption>) -> Self {
        options.sort_by_key(|o| o.price);
        Self { options }
    }

    /// The built-in delivery tiers used by dev tooling and demos.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            ShippingOption::new("free", "Free Shipping", "5-7 business days", Money::ZERO),
            ShippingOption::new(
                "express",
                "Express Shipping",
                "2-3 business days",
                Money::from_cents(999),
            ),
            ShippingOption::new(
                "overnight",
                "Overnight Shipping",
                "next business day",
                Money::from_cents(1999),
            ),
        ])
    }

    /// Look up an option by id.
    #[must_use]
    pub fn get(&self, id: &ShippingOptionId) -> Option<&ShippingOption> {
        self.options.iter().find(|o| &o.id == id)
    }

    /// Whether the catalog contains the given id.
    #[must_use]
    pub fn contains(&self, id: &ShippingOptionId) -> bool {
        self.get(id).is_some()
    }

    /// The default selection: the first (cheapest) option.
    #[must_use]
    pub fn default_option(&self) -> Option<&ShippingOption> {
        self.options.first()
    }

    /// All options, cheapest first.
    #[must_use]
    pub fn options(&self) -> &[ShippingOption] {
        &self.options
    }

    /// Whether the catalog has no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
