//! Lepakshi storefront state library.
//!
//! The shopper-side state of the storefront: a cart with promo codes and
//! derived totals, a wishlist, the product catalog they resolve against, and
//! the local storage they persist to. Front ends (the `lk-cli` binary, tests)
//! drive it through [`state::StorefrontState`] or the individual stores.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod state;
pub mod storage;
pub mod wishlist;
