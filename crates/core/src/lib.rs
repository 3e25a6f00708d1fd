//! QuickBite Core - Shared types library.
//!
//! This crate provides common types used across all QuickBite components:
//! - `storefront` - Catalog, stores, and checkout library (plus demo binary)
//! - `integration-tests` - End-to-end flows over the public API
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! timers. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
