//! Integration tests for Cartwheel.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cartwheel-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_checkout` - Cart mutations, totals, and the checkout lifecycle
//! - `profile_editing` - Draft/committed editing and save serialization
//! - `toast_expiry` - Auto-expiry timing and timer cancellation
//! - `theme_persistence` - Theme flag resolution and file-backed storage
//!
//! The stores run with zero simulated latency unless a test is specifically
//! about in-flight behavior, in which case it uses paused tokio time.

use cartwheel_stores::config::SimulatedLatency;
use cartwheel_stores::{CartStore, ProfileStore, ShippingCatalog, UserProfile};

/// A cart over the standard shipping catalog with no simulated latency.
#[must_use]
pub fn instant_cart() -> CartStore {
    CartStore::new(ShippingCatalog::standard(), SimulatedLatency::ZERO)
}

/// A profile store seeded with a filled-in profile and no simulated latency.
#[must_use]
pub fn instant_profile() -> ProfileStore {
    ProfileStore::new(sample_profile(), SimulatedLatency::ZERO)
}

/// A complete, valid profile for seeding tests.
#[must_use]
pub fn sample_profile() -> UserProfile {
    UserProfile {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        address: "12 Elm St".into(),
        city: "Springfield".into(),
        state: "IL".into(),
        zip: "62704".into(),
        country: "USA".into(),
        phone: "5551234567".into(),
        avatar_url: String::new(),
    }
}
