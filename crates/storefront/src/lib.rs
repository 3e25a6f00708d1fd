//! QuickBite Storefront library.
//!
//! This crate provides the storefront core as a library, allowing it to be
//! tested and reused: the static catalog with filtering and search, the
//! persisted cart and user/address stores, and the simulated checkout flow.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod store;
