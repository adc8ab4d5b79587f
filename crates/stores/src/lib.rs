//! Cartwheel Stores - The storefront state layer.
//!
//! This crate holds the client-side state of the storefront as explicit
//! store instances: a shopping cart, a user profile with draft/committed
//! editing, an ephemeral toast queue, and a persisted theme flag. Stores are
//! cheap-to-clone handles over shared inner state; views read through
//! accessors and mutate through methods.
//!
//! There is no server and no wire surface here. The only external interfaces
//! are the [`storage::KeyValueStore`] boundary (one durable key for the
//! theme flag) and the read-only catalogs supplied by the data layer.
//!
//! # Modules
//!
//! - [`catalog`] - Read-only product and shipping catalogs
//! - [`cart`] - Line items, totals, and the checkout flow
//! - [`profile`] - Draft/committed user profile with field validation
//! - [`toast`] - Notification queue with auto-expiry timers
//! - [`theme`] - Dark/light scheme with durable persistence
//! - [`storage`] - Key-value storage boundary
//! - [`config`] - Environment-driven configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod profile;
pub mod storage;
pub mod theme;
pub mod toast;

pub use cart::CartStore;
pub use catalog::{Product, ShippingCatalog, ShippingOption};
pub use config::{SimulatedLatency, StoreConfig};
pub use error::CheckoutError;
pub use profile::{ProfileField, ProfileStore, UserProfile};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use theme::{Palette, ThemeStore};
pub use toast::{ToastOptions, ToastRecord, ToastStore, ToastUpdate};
