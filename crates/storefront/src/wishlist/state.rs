//! Wishlist state and its reducer.

use chrono::{DateTime, Utc};
use lepakshi_core::{Product, ProductId};

/// A saved product.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistEntry {
    pub product_id: ProductId,
    pub product: Product,
    pub added_at: DateTime<Utc>,
}

/// Saved products, at most one entry per product ID, in the order added.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WishlistState {
    pub items: Vec<WishlistEntry>,
}

/// Wishlist transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum WishlistAction {
    /// Save a product. No-op when already saved.
    AddItem {
        product: Product,
        added_at: DateTime<Utc>,
    },
    RemoveItem {
        product_id: ProductId,
    },
    Clear,
    /// Replace everything. Only used when hydrating from storage.
    Load(WishlistState),
}

impl WishlistState {
    /// Apply `action` and return the resulting state.
    #[must_use]
    pub fn reduce(mut self, action: WishlistAction) -> Self {
        match action {
            WishlistAction::AddItem { product, added_at } => {
                if !self.contains(product.id) {
                    self.items.push(WishlistEntry {
                        product_id: product.id,
                        product,
                        added_at,
                    });
                }
                self
            }
            WishlistAction::RemoveItem { product_id } => {
                self.items.retain(|entry| entry.product_id != product_id);
                self
            }
            WishlistAction::Clear => Self::default(),
            WishlistAction::Load(state) => state,
        }
    }

    #[must_use]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|entry| entry.product_id == product_id)
    }
}
