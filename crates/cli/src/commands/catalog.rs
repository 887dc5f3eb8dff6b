//! Catalog browsing commands.
//!
//! # Usage
//!
//! ```bash
//! lk-cli catalog list
//! lk-cli catalog list --category spiritual
//! lk-cli catalog show 12
//! lk-cli catalog featured
//! ```

use lepakshi_core::{CategoryId, Product};
use lepakshi_storefront::catalog::Catalog;
use lepakshi_storefront::error::{AppError, Result};
use lepakshi_storefront::state::StorefrontState;

use super::{emit, product_row};

/// Number of related products shown under a product.
const RELATED_LIMIT: usize = 4;

/// List all products, or those in one category.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the category does not exist.
pub fn list(state: &StorefrontState, category: Option<&str>) -> Result<()> {
    emit(&list_lines(state.catalog(), category)?);
    Ok(())
}

fn list_lines(catalog: &Catalog, category: Option<&str>) -> Result<Vec<String>> {
    let products: Vec<&Product> = match category {
        Some(key) => {
            let category = catalog
                .category_by_id(&CategoryId::new(key))
                .or_else(|| catalog.category_by_slug(key))
                .ok_or_else(|| AppError::NotFound(format!("category {key:?}")))?;
            catalog.products_by_category(&category.id)
        }
        None => catalog.products().iter().collect(),
    };
    Ok(products.into_iter().map(product_row).collect())
}

/// Show one product in detail.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the product does not exist.
pub fn show(state: &StorefrontState, product: &str) -> Result<()> {
    let product = state.find_product(product)?;
    emit(&detail_lines(state, product));
    Ok(())
}

fn detail_lines(state: &StorefrontState, product: &Product) -> Vec<String> {
    let catalog = state.catalog();
    let mut lines = vec![
        product_row(product),
        format!("      {}", catalog.product_path(product)),
        format!(
            "      Rating {:.1} ({} reviews)",
            product.rating, product.reviews
        ),
    ];
    if let Some(sku) = &product.sku {
        lines.push(format!("      SKU {sku}"));
    }
    if let Some(description) = &product.description {
        lines.push(String::new());
        lines.push(description.clone());
    }
    if !product.highlights.is_empty() {
        lines.push(String::new());
        lines.extend(product.highlights.iter().map(|h| format!("  * {h}")));
    }
    if !product.specifications.is_empty() {
        lines.push(String::new());
        lines.extend(
            product
                .specifications
                .iter()
                .map(|(name, value)| format!("  {name}: {value}")),
        );
    }

    let mut status = Vec::new();
    let quantity = state.cart().item_quantity(product.id);
    if quantity > 0 {
        status.push(format!("{quantity} in cart"));
    }
    if state.wishlist().is_in_wishlist(product.id) {
        status.push("saved".to_string());
    }
    if !status.is_empty() {
        lines.push(String::new());
        lines.push(format!("({})", status.join(", ")));
    }

    let related = catalog.related_products(product, RELATED_LIMIT);
    if !related.is_empty() {
        lines.push(String::new());
        lines.push("Related:".to_string());
        lines.extend(related.into_iter().map(product_row));
    }
    lines
}

/// List featured products.
pub fn featured(state: &StorefrontState) {
    let lines: Vec<String> = state
        .catalog()
        .featured_products()
        .into_iter()
        .map(product_row)
        .collect();
    emit(&lines);
}
