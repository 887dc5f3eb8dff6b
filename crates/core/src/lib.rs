//! Lepakshi Core - Shared types library.
//!
//! This crate provides common types used across all Lepakshi components:
//! - `storefront` - Cart, wishlist, and catalog state layer
//! - `cli` - Command-line driver over the state layer
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! clocks. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, promo codes, and catalog records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
