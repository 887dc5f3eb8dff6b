//! Persisted wishlist layout: `{ items: [{productId, addedAt}] }`.
//!
//! An entry with an unreadable product ID or timestamp is skipped without
//! discarding the rest of the list.

use chrono::{DateTime, Utc};
use lepakshi_core::ProductId;
use serde::{Deserialize, Serialize};

use super::state::{WishlistEntry, WishlistState};
use crate::catalog::ProductCatalog;
use crate::storage::snapshot::skip_invalid_entries;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistSnapshot {
    #[serde(default, deserialize_with = "skip_invalid_entries")]
    pub items: Vec<WishlistSnapshotItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistSnapshotItem {
    pub product_id: ProductId,
    /// Unix milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub added_at: DateTime<Utc>,
}

impl From<&WishlistState> for WishlistSnapshot {
    fn from(state: &WishlistState) -> Self {
        Self {
            items: state
                .items
                .iter()
                .map(|entry| WishlistSnapshotItem {
                    product_id: entry.product_id,
                    added_at: entry.added_at,
                })
                .collect(),
        }
    }
}

impl WishlistSnapshot {
    /// Rebuild a [`WishlistState`], dropping products the catalog no longer
    /// lists and any repeated product IDs after the first.
    #[must_use]
    pub fn hydrate(self, catalog: &dyn ProductCatalog) -> WishlistState {
        let mut state = WishlistState::default();
        for item in self.items {
            if state.contains(item.product_id) {
                continue;
            }
            match catalog.product_by_id(item.product_id) {
                Some(product) => state.items.push(WishlistEntry {
                    product_id: item.product_id,
                    product,
                    added_at: item.added_at,
                }),
                None => {
                    tracing::debug!(product_id = %item.product_id, "Dropping stale wishlist entry");
                }
            }
        }
        state
    }
}
