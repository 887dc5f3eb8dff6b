//! Session state shared by the storefront front ends.

use std::sync::Arc;

use lepakshi_core::{Product, ProductId};

use crate::cart::{CartStore, DEFAULT_ADD_QUANTITY};
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result};
use crate::storage::{FileStorage, LocalStorage, keys};
use crate::wishlist::WishlistStore;

/// One shopper session: the catalog plus a cart and a wishlist sharing a
/// single storage backend.
pub struct StorefrontState {
    catalog: Arc<Catalog>,
    storage: Arc<dyn LocalStorage>,
    cart: CartStore,
    wishlist: WishlistStore,
}

impl StorefrontState {
    /// Load the catalog and open both stores on file storage in
    /// `config.data_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured catalog cannot be loaded.
    pub fn new(config: &StorefrontConfig) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::builtin()?,
        };
        let storage = Arc::new(FileStorage::new(&config.data_dir));
        tracing::debug!(data_dir = %config.data_dir.display(), "Opening storefront state");
        Ok(Self::from_parts(
            Arc::new(catalog),
            storage,
            &config.namespace,
        ))
    }

    /// Assemble state from an already-loaded catalog and any storage backend.
    #[must_use]
    pub fn from_parts(
        catalog: Arc<Catalog>,
        storage: Arc<dyn LocalStorage>,
        namespace: &str,
    ) -> Self {
        let cart = CartStore::new(catalog.clone(), storage.clone(), keys::cart(namespace));
        let wishlist =
            WishlistStore::new(catalog.clone(), storage.clone(), keys::wishlist(namespace));
        Self {
            catalog,
            storage,
            cart,
            wishlist,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn storage(&self) -> &Arc<dyn LocalStorage> {
        &self.storage
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    #[must_use]
    pub const fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    pub fn wishlist_mut(&mut self) -> &mut WishlistStore {
        &mut self.wishlist
    }

    /// Look up a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the catalog does not list it.
    pub fn product(&self, product_id: ProductId) -> Result<&Product> {
        self.catalog
            .product(product_id)
            .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))
    }

    /// Look up a product by numeric ID or slug.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if nothing matches.
    pub fn find_product(&self, id_or_slug: &str) -> Result<&Product> {
        let id_or_slug = id_or_slug.trim();
        let found = match id_or_slug.parse::<ProductId>() {
            Ok(id) => self.catalog.product(id),
            Err(_) => self.catalog.product_by_slug(id_or_slug),
        };
        found.ok_or_else(|| AppError::NotFound(format!("product {id_or_slug:?}")))
    }

    /// Move a saved product into the cart with the default quantity and drop
    /// it from the wishlist.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the catalog does not list the product
    /// and `AppError::BadRequest` if it is not in the wishlist.
    pub fn move_to_cart(&mut self, product_id: ProductId) -> Result<()> {
        let product = self.product(product_id)?.clone();
        if !self.wishlist.is_in_wishlist(product_id) {
            return Err(AppError::BadRequest(format!(
                "product {product_id} is not in the wishlist"
            )));
        }
        self.cart.add_item(product, DEFAULT_ADD_QUANTITY);
        self.wishlist.remove_item(product_id);
        tracing::info!(%product_id, "Moved wishlist item to cart");
        Ok(())
    }
}

impl std::fmt::Debug for StorefrontState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontState")
            .field("cart", &self.cart)
            .field("wishlist", &self.wishlist)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn state() -> StorefrontState {
        StorefrontState::from_parts(
            Arc::new(Catalog::builtin().unwrap()),
            Arc::new(MemoryStorage::new()),
            keys::DEFAULT_NAMESPACE,
        )
    }

    #[test]
    fn test_find_product_by_id_or_slug() {
        let state = state();
        assert_eq!(state.find_product("12").unwrap().slug, "rudraksha-mala");
        assert_eq!(
            state.find_product("rudraksha-mala").unwrap().id,
            ProductId::new(12)
        );
        assert!(matches!(
            state.find_product("no-such-thing"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_move_to_cart() {
        let mut state = state();
        let mala = state.product(ProductId::new(12)).unwrap().clone();
        state.wishlist_mut().add_item(mala);

        state.move_to_cart(ProductId::new(12)).unwrap();

        assert!(!state.wishlist().is_in_wishlist(ProductId::new(12)));
        assert_eq!(state.cart().item_quantity(ProductId::new(12)), 1);
    }

    #[test]
    fn test_move_to_cart_increments_existing_line() {
        let mut state = state();
        let mala = state.product(ProductId::new(12)).unwrap().clone();
        state.cart_mut().add_item(mala.clone(), 2);
        state.wishlist_mut().add_item(mala);

        state.move_to_cart(ProductId::new(12)).unwrap();
        assert_eq!(state.cart().item_quantity(ProductId::new(12)), 3);
    }

    #[test]
    fn test_move_to_cart_requires_wishlist_entry() {
        let mut state = state();
        let err = state.move_to_cart(ProductId::new(1)).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(!state.cart().is_in_cart(ProductId::new(1)));

        let err = state.move_to_cart(ProductId::new(999)).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_stores_share_storage() {
        let mut state = state();
        let product = state.product(ProductId::new(1)).unwrap().clone();
        state.cart_mut().add_item(product.clone(), 1);
        state.wishlist_mut().add_item(product);

        let storage = state.storage();
        assert!(storage.get_item("lepakshi_cart").unwrap().is_some());
        assert!(storage.get_item("lepakshi_wishlist").unwrap().is_some());
    }
}
