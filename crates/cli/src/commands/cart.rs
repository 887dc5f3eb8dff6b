//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! lk-cli cart add kondapalli-dashavatar-set -q 2
//! lk-cli cart update 1 5
//! lk-cli cart promo WELCOME10
//! lk-cli cart show
//! ```

use lepakshi_core::Price;
use lepakshi_storefront::cart::CartStore;
use lepakshi_storefront::error::{AppError, Result};
use lepakshi_storefront::state::StorefrontState;

use super::emit;

/// Print the cart lines and totals.
pub fn show(state: &StorefrontState) {
    emit(&cart_lines(state.cart()));
}

fn cart_lines(cart: &CartStore) -> Vec<String> {
    if cart.items().is_empty() {
        return vec!["Your cart is empty".to_string()];
    }

    let mut lines: Vec<String> = cart
        .items()
        .iter()
        .map(|line| {
            format!(
                "{:>4}  {} x {}  {} = {}",
                line.product_id.as_i32(),
                line.quantity,
                line.product.name,
                line.product.price,
                line.product.price * line.quantity
            )
        })
        .collect();

    let totals = cart.totals();
    lines.push(String::new());
    lines.push(format!(
        "Subtotal ({} items): {}",
        totals.item_count, totals.subtotal
    ));
    if totals.savings > Price::ZERO {
        lines.push(format!("You save: {}", totals.savings));
    }
    if let Some(code) = cart.promo_code() {
        lines.push(format!(
            "Promo {code} ({}% off): -{}",
            cart.promo_discount_percent(),
            totals.promo_discount
        ));
    }
    if totals.shipping == Price::ZERO {
        lines.push("Shipping: Free".to_string());
    } else {
        lines.push(format!("Shipping: {}", totals.shipping));
        if totals.free_shipping_remaining > Price::ZERO {
            lines.push(format!(
                "Add {} more for free shipping",
                totals.free_shipping_remaining
            ));
        }
    }
    lines.push(format!("Total: {}", totals.total));
    lines
}

/// Add a product to the cart.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the product does not exist.
pub fn add(state: &mut StorefrontState, product: &str, quantity: u32) -> Result<()> {
    let product = state.find_product(product)?.clone();
    let product_id = product.id;
    state.cart_mut().add_item(product, quantity);
    tracing::info!(
        %product_id,
        quantity = state.cart().item_quantity(product_id),
        "Cart updated"
    );
    show(state);
    Ok(())
}

/// Remove a product from the cart.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the product does not exist.
pub fn remove(state: &mut StorefrontState, product: &str) -> Result<()> {
    let product_id = state.find_product(product)?.id;
    state.cart_mut().remove_item(product_id);
    show(state);
    Ok(())
}

/// Set a line's quantity.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the product does not exist.
pub fn update(state: &mut StorefrontState, product: &str, quantity: i64) -> Result<()> {
    let product_id = state.find_product(product)?.id;
    state.cart_mut().update_quantity(product_id, quantity);
    show(state);
    Ok(())
}

/// Empty the cart.
pub fn clear(state: &mut StorefrontState) {
    state.cart_mut().clear();
    tracing::info!("Cart cleared");
}

/// Apply a promo code.
///
/// # Errors
///
/// Returns `AppError::BadRequest` if the code is not recognised.
pub fn apply_promo(state: &mut StorefrontState, code: &str) -> Result<()> {
    if !state.cart_mut().apply_promo(code) {
        return Err(AppError::BadRequest(format!("invalid promo code {code:?}")));
    }
    show(state);
    Ok(())
}

/// Remove the applied promo code.
pub fn remove_promo(state: &mut StorefrontState) {
    state.cart_mut().remove_promo();
    show(state);
}
