//! Cartwheel Core - Shared types library.
//!
//! This crate provides common types used across all Cartwheel components:
//! - `stores` - The storefront state layer (cart, profile, toasts, theme)
//! - `cli` - Command-line dev tooling
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no timers, no async. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
