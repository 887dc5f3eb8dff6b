//! Core types for Lepakshi.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod promo;

pub use id::*;
pub use price::{CurrencyCode, Price};
pub use product::{Category, CategoryGroup, Product, Subcategory};
pub use promo::{PromoCode, PromoCodeError};
