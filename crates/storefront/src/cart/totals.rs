//! Derived cart totals.
//!
//! Nothing here is stored; [`CartTotals::from_state`] recomputes every value
//! from the line items and promo on each call.

use lepakshi_core::Price;

use super::state::CartState;

/// Subtotal at or above which shipping is free.
pub const FREE_SHIPPING_THRESHOLD: i64 = 999;

/// Flat shipping fee below the threshold.
pub const SHIPPING_COST: i64 = 99;

/// Money and count figures derived from a [`CartState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Σ price × quantity.
    pub subtotal: Price,
    /// Σ (original price or price − price) × quantity.
    pub savings: Price,
    /// subtotal × promo percent / 100.
    pub promo_discount: Price,
    pub shipping: Price,
    /// subtotal − promo discount + shipping.
    pub total: Price,
    /// Σ quantity.
    pub item_count: u32,
    /// How much more subtotal is needed for free shipping; zero once reached.
    pub free_shipping_remaining: Price,
}

impl CartTotals {
    /// Compute totals for `state`.
    #[must_use]
    pub fn from_state(state: &CartState) -> Self {
        let subtotal: Price = state
            .items
            .iter()
            .map(|item| item.product.price * item.quantity)
            .sum();
        let savings: Price = state
            .items
            .iter()
            .map(|item| item.product.unit_savings() * item.quantity)
            .sum();
        let item_count = state
            .items
            .iter()
            .fold(0_u32, |count, item| count.saturating_add(item.quantity));

        let promo_discount = subtotal.percent(state.promo_discount_percent);
        let shipping = shipping_for(subtotal);
        let threshold = Price::from_major(FREE_SHIPPING_THRESHOLD);
        let free_shipping_remaining = if subtotal < threshold {
            threshold - subtotal
        } else {
            Price::ZERO
        };

        Self {
            subtotal,
            savings,
            promo_discount,
            shipping,
            total: subtotal - promo_discount + shipping,
            item_count,
            free_shipping_remaining,
        }
    }
}

/// Shipping fee for a given subtotal: free at or above the threshold.
#[must_use]
pub fn shipping_for(subtotal: Price) -> Price {
    if subtotal >= Price::from_major(FREE_SHIPPING_THRESHOLD) {
        Price::ZERO
    } else {
        Price::from_major(SHIPPING_COST)
    }
}
