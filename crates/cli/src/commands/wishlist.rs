//! Wishlist commands.
//!
//! # Usage
//!
//! ```bash
//! lk-cli wishlist toggle rudraksha-mala
//! lk-cli wishlist show
//! lk-cli wishlist move-to-cart 12
//! ```

use lepakshi_storefront::error::Result;
use lepakshi_storefront::state::StorefrontState;
use lepakshi_storefront::wishlist::WishlistStore;

use super::{emit, product_row};

/// Print saved products, oldest first.
pub fn show(state: &StorefrontState) {
    emit(&wishlist_lines(state.wishlist()));
}

fn wishlist_lines(wishlist: &WishlistStore) -> Vec<String> {
    if wishlist.items().is_empty() {
        return vec!["Your wishlist is empty".to_string()];
    }
    let mut lines = vec![format!("{} saved", wishlist.item_count())];
    lines.extend(wishlist.items().iter().map(|entry| {
        format!(
            "{}  (saved {})",
            product_row(&entry.product),
            entry.added_at.format("%Y-%m-%d %H:%M UTC")
        )
    }));
    lines
}

/// Save the product if not saved, otherwise unsave it.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the product does not exist.
pub fn toggle(state: &mut StorefrontState, product: &str) -> Result<()> {
    let product = state.find_product(product)?.clone();
    let product_id = product.id;
    let saved = state.wishlist_mut().toggle(product);
    tracing::info!(%product_id, saved, "Wishlist toggled");
    show(state);
    Ok(())
}

/// Save a product.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the product does not exist.
pub fn add(state: &mut StorefrontState, product: &str) -> Result<()> {
    let product = state.find_product(product)?.clone();
    state.wishlist_mut().add_item(product);
    show(state);
    Ok(())
}

/// Unsave a product.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the product does not exist.
pub fn remove(state: &mut StorefrontState, product: &str) -> Result<()> {
    let product_id = state.find_product(product)?.id;
    state.wishlist_mut().remove_item(product_id);
    show(state);
    Ok(())
}

/// Remove every saved product.
pub fn clear(state: &mut StorefrontState) {
    state.wishlist_mut().clear();
    tracing::info!("Wishlist cleared");
}

/// Add a saved product to the cart and unsave it.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the product does not exist and
/// `AppError::BadRequest` if it is not saved.
pub fn move_to_cart(state: &mut StorefrontState, product: &str) -> Result<()> {
    let product_id = state.find_product(product)?.id;
    state.move_to_cart(product_id)?;
    show(state);
    Ok(())
}
