//! Storefront URL paths for catalog records.
//!
//! Paths follow the navigation hierarchy:
//! `/<group>/<category>/<subcategory>/<product-slug>`.

use lepakshi_core::{Category, Product, Subcategory};

use super::Catalog;

impl Catalog {
    /// Full path of a product page.
    ///
    /// Falls back to `/products/<id>` when the product's category or
    /// subcategory is not in the catalog.
    #[must_use]
    pub fn product_path(&self, product: &Product) -> String {
        let category = self.category_by_id(&product.category_id);
        let subcategory = self.subcategory_by_id(&product.subcategory_id);
        match (category, subcategory) {
            (Some(category), Some(subcategory)) => format!(
                "/{}/{}/{}/{}",
                category.parent_slug, category.slug, subcategory.slug, product.slug
            ),
            _ => format!("/products/{}", product.id),
        }
    }

    /// Path of a category listing.
    #[must_use]
    pub fn category_path(category: &Category) -> String {
        format!("/{}/{}", category.parent_slug, category.slug)
    }

    /// Path of a subcategory listing.
    #[must_use]
    pub fn subcategory_path(category: &Category, subcategory: &Subcategory) -> String {
        format!(
            "/{}/{}/{}",
            category.parent_slug, category.slug, subcategory.slug
        )
    }
}
