//! Catalog records: products and the category tree they hang off.
//!
//! These are immutable reference data. The cart and wishlist hold copies of
//! [`Product`] but never modify them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::id::{CategoryGroupId, CategoryId, ProductId, SubcategoryId};
use super::price::Price;

/// A product listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// URL slug, unique across the catalog.
    pub slug: String,
    pub price: Price,
    /// Pre-discount price, shown struck through when higher than `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    /// Merchandising label such as `"Bestseller"` or `"New"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub category_id: CategoryId,
    pub subcategory_id: SubcategoryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub specifications: BTreeMap<String, String>,
    pub rating: f32,
    pub reviews: u32,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

const fn default_in_stock() -> bool {
    true
}

impl Product {
    /// The price a shopper would have paid without the listed discount.
    #[must_use]
    pub fn list_price(&self) -> Price {
        self.original_price.unwrap_or(self.price)
    }

    /// Per-unit difference between the list price and the selling price.
    ///
    /// Not clamped: a catalog entry whose original price is below its price
    /// yields a negative amount.
    #[must_use]
    pub fn unit_savings(&self) -> Price {
        self.list_price() - self.price
    }

    /// Whole-number discount percentage, zero when not discounted.
    #[must_use]
    pub fn discount_percent(&self) -> u32 {
        self.price.discount_percent_from(self.list_price())
    }

    /// Whether the product carries one of the given tags.
    #[must_use]
    pub fn has_tag(&self, tags: &[&str]) -> bool {
        self.tag.as_deref().is_some_and(|tag| tags.contains(&tag))
    }
}

/// Top-level navigation grouping ("Handicrafts", "Spiritual & Pooja").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    pub id: CategoryGroupId,
    pub name: String,
    pub slug: String,
    pub tagline: String,
}

/// A product category with its subcategories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub tagline: String,
    /// Slug of the owning [`CategoryGroup`], first segment of category URLs.
    pub parent_slug: String,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

/// A subcategory, nested under exactly one [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: SubcategoryId,
    pub name: String,
    pub slug: String,
    pub category_id: CategoryId,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": 1,
            "name": "Kondapalli Dashavatar Set",
            "slug": "kondapalli-dashavatar-set",
            "price": "4500",
            "originalPrice": "5200",
            "tag": "Bestseller",
            "categoryId": "wood",
            "subcategoryId": "kondapalli",
            "rating": 4.8,
            "reviews": 124
        }"#
    }

    #[test]
    fn test_deserialize_defaults() {
        let product: Product = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert!(product.in_stock);
        assert!(product.highlights.is_empty());
        assert!(product.sku.is_none());
    }

    #[test]
    fn test_savings_and_discount() {
        let product: Product = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(product.unit_savings(), Price::from_major(700));
        assert_eq!(product.discount_percent(), 13);
        assert!(product.has_tag(&["Bestseller", "Premium"]));
    }

    #[test]
    fn test_no_original_price_means_no_savings() {
        let mut product: Product = serde_json::from_str(sample_json()).unwrap();
        product.original_price = None;
        assert_eq!(product.list_price(), product.price);
        assert_eq!(product.unit_savings(), Price::ZERO);
        assert_eq!(product.discount_percent(), 0);
    }
}
