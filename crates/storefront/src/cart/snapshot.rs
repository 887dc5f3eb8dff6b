//! Persisted cart layout.
//!
//! Only product references are stored; full product records are re-resolved
//! against the catalog on load, and references the catalog no longer knows
//! are dropped. Reading is lenient: an unreadable line item is skipped on its
//! own, and an unreadable promo field clears only the promo.

use lepakshi_core::ProductId;
use serde::{Deserialize, Deserializer, Serialize};

use super::state::{CartLineItem, CartState};
use crate::catalog::ProductCatalog;
use crate::storage::snapshot::skip_invalid_entries;

/// `{ items: [{productId, quantity}], promoCode, promoDiscountPercent }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    #[serde(default, deserialize_with = "skip_invalid_entries")]
    pub items: Vec<CartSnapshotItem>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub promo_code: Option<String>,
    /// Older snapshots call this field `promoDiscount`.
    #[serde(default, alias = "promoDiscount", deserialize_with = "percent_or_zero")]
    pub promo_discount_percent: u8,
}

fn string_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| value.as_str().map(str::to_string)))
}

/// Anything but a whole number in `0..=255` reads as zero, which `hydrate`
/// treats as no promo.
fn percent_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_u64)
        .and_then(|percent| u8::try_from(percent).ok())
        .unwrap_or(0))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshotItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl From<&CartState> for CartSnapshot {
    fn from(state: &CartState) -> Self {
        Self {
            items: state
                .items
                .iter()
                .map(|item| CartSnapshotItem {
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
            promo_code: state.promo_code.clone(),
            promo_discount_percent: state.promo_discount_percent,
        }
    }
}

impl CartSnapshot {
    /// Rebuild a [`CartState`], resolving products through `catalog`.
    ///
    /// Items whose product is gone or whose quantity is zero are dropped. A
    /// missing or blank promo code, or a percent outside `1..=100`, clears the
    /// promo entirely so the code and percent stay consistent.
    #[must_use]
    pub fn hydrate(self, catalog: &dyn ProductCatalog) -> CartState {
        let items = self
            .items
            .into_iter()
            .filter(|item| item.quantity > 0)
            .filter_map(|item| {
                let Some(product) = catalog.product_by_id(item.product_id) else {
                    tracing::debug!(product_id = %item.product_id, "Dropping stale cart item");
                    return None;
                };
                Some(CartLineItem {
                    product_id: item.product_id,
                    quantity: item.quantity,
                    product,
                })
            })
            .collect();

        let promo_code = self
            .promo_code
            .filter(|code| !code.trim().is_empty())
            .filter(|_| (1..=100).contains(&self.promo_discount_percent));
        let promo_discount_percent = if promo_code.is_some() {
            self.promo_discount_percent
        } else {
            0
        };

        CartState {
            items,
            promo_code,
            promo_discount_percent,
        }
    }
}
