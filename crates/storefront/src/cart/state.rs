//! Cart state and its reducer.
//!
//! [`CartState::reduce`] is a pure transition: it consumes the current state
//! and an action and returns the next state. Quantities are clamped or turned
//! into removals here, never rejected.

use lepakshi_core::{Product, ProductId};

/// Largest quantity a line item reaches through merging or updating.
pub const MAX_LINE_QUANTITY: u32 = 10;

/// One distinct product in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub product: Product,
}

/// Line items plus the applied promo.
///
/// `promo_discount_percent` is zero exactly when `promo_code` is `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    pub items: Vec<CartLineItem>,
    pub promo_code: Option<String>,
    pub promo_discount_percent: u8,
}

/// Cart transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add `quantity` of a product, merging into an existing line.
    AddItem { product: Product, quantity: u32 },
    /// Drop the line for `product_id`.
    RemoveItem { product_id: ProductId },
    /// Set a line's quantity; zero or below removes it.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    /// Empty the cart and clear the promo.
    Clear,
    /// Record an already-validated promo.
    ApplyPromo { code: String, discount_percent: u8 },
    /// Clear the promo.
    RemovePromo,
    /// Replace everything. Only used when hydrating from storage.
    Load(CartState),
}

impl CartState {
    /// Apply `action` and return the resulting state.
    #[must_use]
    pub fn reduce(mut self, action: CartAction) -> Self {
        match action {
            CartAction::AddItem { product, quantity } => {
                if quantity == 0 {
                    return self;
                }
                if let Some(item) = self.line_mut(product.id) {
                    item.quantity = item
                        .quantity
                        .saturating_add(quantity)
                        .min(MAX_LINE_QUANTITY);
                } else {
                    // First insert keeps the requested quantity as-is.
                    self.items.push(CartLineItem {
                        product_id: product.id,
                        quantity,
                        product,
                    });
                }
                self
            }
            CartAction::RemoveItem { product_id } => {
                self.items.retain(|item| item.product_id != product_id);
                self
            }
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => {
                if quantity <= 0 {
                    return self.reduce(CartAction::RemoveItem { product_id });
                }
                if let Some(item) = self.line_mut(product_id) {
                    item.quantity = u32::try_from(quantity)
                        .unwrap_or(MAX_LINE_QUANTITY)
                        .min(MAX_LINE_QUANTITY);
                }
                self
            }
            CartAction::Clear => Self::default(),
            CartAction::ApplyPromo {
                code,
                discount_percent,
            } => Self {
                promo_code: Some(code.to_uppercase()),
                promo_discount_percent: discount_percent,
                ..self
            },
            CartAction::RemovePromo => Self {
                promo_code: None,
                promo_discount_percent: 0,
                ..self
            },
            CartAction::Load(state) => state,
        }
    }

    /// The line for `product_id`, if present.
    #[must_use]
    pub fn line(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLineItem> {
        self.items
            .iter_mut()
            .find(|item| item.product_id == product_id)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::product;
    use super::*;

    fn add(state: CartState, id: i32, quantity: u32) -> CartState {
        state.reduce(CartAction::AddItem {
            product: product(id, 500, None),
            quantity,
        })
    }

    #[test]
    fn test_add_new_item() {
        let state = add(CartState::default(), 1, 3);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.line(ProductId::new(1)).map(|i| i.quantity), Some(3));
    }

    #[test]
    fn test_add_merges_and_caps() {
        let state = add(add(CartState::default(), 1, 4), 1, 5);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].quantity, 9);

        let state = add(state, 1, 5);
        assert_eq!(state.items[0].quantity, MAX_LINE_QUANTITY);
    }

    #[test]
    fn test_first_add_is_not_clamped() {
        let state = add(CartState::default(), 1, 15);
        assert_eq!(state.items[0].quantity, 15);

        // A later merge brings it back under the cap.
        let state = add(state, 1, 1);
        assert_eq!(state.items[0].quantity, MAX_LINE_QUANTITY);
    }

    #[test]
    fn test_add_zero_quantity_is_noop() {
        let state = add(CartState::default(), 1, 0);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_add_preserves_order() {
        let state = add(add(add(CartState::default(), 2, 1), 1, 1), 2, 1);
        let ids: Vec<_> = state.items.iter().map(|i| i.product_id.as_i32()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_remove_item() {
        let state = add(add(CartState::default(), 1, 1), 2, 1);
        let state = state.reduce(CartAction::RemoveItem {
            product_id: ProductId::new(1),
        });
        assert!(state.line(ProductId::new(1)).is_none());
        assert!(state.line(ProductId::new(2)).is_some());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let before = add(CartState::default(), 1, 2);
        let after = before.clone().reduce(CartAction::RemoveItem {
            product_id: ProductId::new(99),
        });
        assert_eq!(before, after);
    }

    #[test]
    fn test_update_quantity_sets_and_clamps() {
        let state = add(CartState::default(), 1, 1);
        let state = state.reduce(CartAction::UpdateQuantity {
            product_id: ProductId::new(1),
            quantity: 7,
        });
        assert_eq!(state.items[0].quantity, 7);

        let state = state.reduce(CartAction::UpdateQuantity {
            product_id: ProductId::new(1),
            quantity: 50,
        });
        assert_eq!(state.items[0].quantity, MAX_LINE_QUANTITY);
    }

    #[test]
    fn test_update_quantity_to_zero_or_negative_removes() {
        for quantity in [0, -3] {
            let state = add(CartState::default(), 1, 2).reduce(CartAction::UpdateQuantity {
                product_id: ProductId::new(1),
                quantity,
            });
            assert!(state.items.is_empty());
        }
    }

    #[test]
    fn test_update_absent_is_noop() {
        let before = add(CartState::default(), 1, 2);
        let after = before.clone().reduce(CartAction::UpdateQuantity {
            product_id: ProductId::new(2),
            quantity: 5,
        });
        assert_eq!(before, after);
    }

    #[test]
    fn test_promo_apply_and_remove() {
        let state = add(CartState::default(), 1, 1).reduce(CartAction::ApplyPromo {
            code: "craft20".to_string(),
            discount_percent: 20,
        });
        assert_eq!(state.promo_code.as_deref(), Some("CRAFT20"));
        assert_eq!(state.promo_discount_percent, 20);
        assert_eq!(state.items.len(), 1);

        let state = state.reduce(CartAction::RemovePromo);
        assert_eq!(state.promo_code, None);
        assert_eq!(state.promo_discount_percent, 0);
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_clear_resets_items_and_promo() {
        let state = add(CartState::default(), 1, 1)
            .reduce(CartAction::ApplyPromo {
                code: "WELCOME10".to_string(),
                discount_percent: 10,
            })
            .reduce(CartAction::Clear);
        assert_eq!(state, CartState::default());
    }

    #[test]
    fn test_load_replaces_state() {
        let loaded = add(CartState::default(), 5, 2);
        let state = add(CartState::default(), 1, 1).reduce(CartAction::Load(loaded.clone()));
        assert_eq!(state, loaded);
    }
}
