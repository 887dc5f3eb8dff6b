//! Read-only product catalog.
//!
//! The cart and wishlist only ever need one thing from the catalog: resolve a
//! [`ProductId`] to a [`Product`]. That seam is the [`ProductCatalog`] trait.
//! [`Catalog`] is the in-memory implementation, loaded from the built-in seed
//! data or from a JSON file with the same schema, and also carries the
//! navigation lookups (categories, slugs, featured and related products).

mod paths;

use std::collections::HashSet;
use std::path::Path;

use lepakshi_core::{
    Category, CategoryGroup, CategoryId, Product, ProductId, Subcategory, SubcategoryId,
};
use serde::Deserialize;
use thiserror::Error;

/// Seed catalog compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Tags that mark a product as featured.
const FEATURED_TAGS: &[&str] = &["Bestseller", "Premium"];

/// Maximum number of featured products.
const FEATURED_LIMIT: usize = 5;

/// Errors loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate product id {0}")]
    DuplicateProductId(ProductId),

    #[error("duplicate product slug {0:?}")]
    DuplicateProductSlug(String),
}

/// Resolves product IDs to catalog records.
pub trait ProductCatalog: Send + Sync {
    /// Look up a product by ID. `None` when the catalog no longer lists it.
    fn product_by_id(&self, id: ProductId) -> Option<Product>;
}

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogData {
    #[serde(default)]
    category_groups: Vec<CategoryGroup>,
    #[serde(default)]
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// In-memory catalog of category groups, categories, and products.
#[derive(Debug, Clone)]
pub struct Catalog {
    groups: Vec<CategoryGroup>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking that product IDs and slugs are unique.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateProductId`] or
    /// [`CatalogError::DuplicateProductSlug`] on a collision.
    pub fn new(
        groups: Vec<CategoryGroup>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Result<Self, CatalogError> {
        check_unique(&products)?;

        Ok(Self {
            groups,
            categories,
            products,
        })
    }

    /// The seed catalog shipped with the storefront.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the embedded data is malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a catalog from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on parse failure or duplicate products.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::new(data.category_groups, data.categories, data.products)
    }

    /// Read a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            products = catalog.products.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories, in catalog order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All category groups.
    #[must_use]
    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// Borrow a product by ID.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    #[must_use]
    pub fn products_by_category(&self, category_id: &CategoryId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| &p.category_id == category_id)
            .collect()
    }

    #[must_use]
    pub fn products_by_subcategory(&self, subcategory_id: &SubcategoryId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| &p.subcategory_id == subcategory_id)
            .collect()
    }

    #[must_use]
    pub fn category_by_id(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    #[must_use]
    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    #[must_use]
    pub fn group_by_slug(&self, slug: &str) -> Option<&CategoryGroup> {
        self.groups.iter().find(|g| g.slug == slug)
    }

    /// Categories belonging to the group with slug `parent_slug`.
    #[must_use]
    pub fn categories_by_parent(&self, parent_slug: &str) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| c.parent_slug == parent_slug)
            .collect()
    }

    /// Find a subcategory by ID across all categories.
    #[must_use]
    pub fn subcategory_by_id(&self, id: &SubcategoryId) -> Option<&Subcategory> {
        self.categories
            .iter()
            .flat_map(|c| c.subcategories.iter())
            .find(|s| &s.id == id)
    }

    /// Find a subcategory by its slug within the category with `category_slug`.
    #[must_use]
    pub fn subcategory_by_slug(
        &self,
        category_slug: &str,
        subcategory_slug: &str,
    ) -> Option<&Subcategory> {
        self.category_by_slug(category_slug)?
            .subcategories
            .iter()
            .find(|s| s.slug == subcategory_slug)
    }

    /// Up to five products tagged "Bestseller" or "Premium".
    #[must_use]
    pub fn featured_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.has_tag(FEATURED_TAGS))
            .take(FEATURED_LIMIT)
            .collect()
    }

    /// Up to `limit` other products from the same subcategory.
    #[must_use]
    pub fn related_products(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.subcategory_id == product.subcategory_id && p.id != product.id)
            .take(limit)
            .collect()
    }
}

fn check_unique(products: &[Product]) -> Result<(), CatalogError> {
    let mut ids = HashSet::new();
    let mut slugs = HashSet::new();
    for product in products {
        if !ids.insert(product.id) {
            return Err(CatalogError::DuplicateProductId(product.id));
        }
        if !slugs.insert(product.slug.as_str()) {
            return Err(CatalogError::DuplicateProductSlug(product.slug.clone()));
        }
    }
    Ok(())
}

impl ProductCatalog for Catalog {
    fn product_by_id(&self, id: ProductId) -> Option<Product> {
        self.product(id).cloned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn ids(products: &[&Product]) -> Vec<i32> {
        products.iter().map(|p| p.id.as_i32()).collect()
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = catalog();
        assert_eq!(catalog.products().len(), 21);
        assert_eq!(catalog.groups().len(), 2);
        assert!(!catalog.categories().is_empty());
    }

    #[test]
    fn test_product_by_id() {
        let catalog = catalog();
        let product = catalog.product_by_id(ProductId::new(1)).unwrap();
        assert_eq!(product.slug, "kondapalli-dashavatar-set");
        assert!(catalog.product_by_id(ProductId::new(9999)).is_none());
    }

    #[test]
    fn test_product_by_slug() {
        let catalog = catalog();
        let product = catalog.product_by_slug("rudraksha-mala").unwrap();
        assert_eq!(product.id, ProductId::new(12));
        assert!(catalog.product_by_slug("missing").is_none());
    }

    #[test]
    fn test_products_by_category_and_subcategory() {
        let catalog = catalog();
        let spiritual = catalog.products_by_category(&CategoryId::new("spiritual"));
        assert_eq!(ids(&spiritual), vec![11, 12, 13, 14, 15]);

        let malas = catalog.products_by_subcategory(&SubcategoryId::new("malas"));
        assert_eq!(ids(&malas), vec![12, 15]);
    }

    #[test]
    fn test_category_lookups() {
        let catalog = catalog();
        let wood = catalog.category_by_slug("wood").unwrap();
        assert_eq!(wood.parent_slug, "handicrafts");
        assert_eq!(catalog.category_by_id(&CategoryId::new("wood")), Some(wood));
        assert!(catalog.group_by_slug("spiritual").is_some());

        let spiritual = catalog.categories_by_parent("spiritual");
        assert_eq!(spiritual.len(), 1);
        assert!(catalog.categories_by_parent("handicrafts").len() > 1);
    }

    #[test]
    fn test_subcategory_lookups() {
        let catalog = catalog();
        let sub = catalog
            .subcategory_by_id(&SubcategoryId::new("etikoppaka"))
            .unwrap();
        assert_eq!(sub.category_id, CategoryId::new("wood"));

        assert!(catalog.subcategory_by_slug("wood", "etikoppaka").is_some());
        assert!(catalog.subcategory_by_slug("metal", "etikoppaka").is_none());
        assert!(catalog.subcategory_by_slug("missing", "etikoppaka").is_none());
    }

    #[test]
    fn test_featured_products() {
        let catalog = catalog();
        assert_eq!(ids(&catalog.featured_products()), vec![1, 2, 6, 9, 11]);
    }

    #[test]
    fn test_related_products() {
        let catalog = catalog();
        let product = catalog.product(ProductId::new(1)).unwrap();
        let related = catalog.related_products(product, 4);
        assert_eq!(ids(&related), vec![2, 3, 4, 5]);

        let tanjore = catalog.product(ProductId::new(18)).unwrap();
        assert!(catalog.related_products(tanjore, 4).is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{
            "products": [
                {"id": 1, "name": "A", "slug": "a", "price": "10", "categoryId": "c",
                 "subcategoryId": "s", "rating": 4.0, "reviews": 1},
                {"id": 1, "name": "B", "slug": "b", "price": "10", "categoryId": "c",
                 "subcategoryId": "s", "rating": 4.0, "reviews": 1}
            ]
        }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateProductId(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, BUILTIN_CATALOG).unwrap();
        assert_eq!(Catalog::from_path(&path).unwrap().products().len(), 21);

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            Catalog::from_path(&missing),
            Err(CatalogError::Io(_))
        ));
    }
}
