//! The wishlist store.

use std::sync::Arc;

use lepakshi_core::{Product, ProductId};
use tracing::instrument;

use super::snapshot::WishlistSnapshot;
use super::state::{WishlistAction, WishlistEntry, WishlistState};
use crate::catalog::ProductCatalog;
use crate::clock::{Clock, SystemClock};
use crate::storage::{self, LocalStorage};

/// Session wishlist, hydrated on construction and persisted after every change.
pub struct WishlistStore {
    state: WishlistState,
    catalog: Arc<dyn ProductCatalog>,
    storage: Arc<dyn LocalStorage>,
    clock: Arc<dyn Clock>,
    key: String,
}

impl WishlistStore {
    /// Create a wishlist persisted under `key`, timestamped with the system clock.
    pub fn new(
        catalog: Arc<dyn ProductCatalog>,
        storage: Arc<dyn LocalStorage>,
        key: impl Into<String>,
    ) -> Self {
        Self::with_clock(catalog, storage, key, Arc::new(SystemClock))
    }

    /// Like [`WishlistStore::new`] with an explicit clock for `added_at`.
    pub fn with_clock(
        catalog: Arc<dyn ProductCatalog>,
        storage: Arc<dyn LocalStorage>,
        key: impl Into<String>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut store = Self {
            state: WishlistState::default(),
            catalog,
            storage,
            clock,
            key: key.into(),
        };
        if let Some(state) = store.load() {
            store.state = store.state.reduce(WishlistAction::Load(state));
        }
        store
    }

    fn load(&self) -> Option<WishlistState> {
        match storage::load_json::<WishlistSnapshot>(self.storage.as_ref(), &self.key) {
            Ok(Some(snapshot)) => {
                let state = snapshot.hydrate(self.catalog.as_ref());
                tracing::debug!(key = %self.key, items = state.items.len(), "Hydrated wishlist");
                Some(state)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::debug!(key = %self.key, error = %e, "Ignoring unreadable wishlist snapshot");
                None
            }
        }
    }

    fn persist(&self) {
        let snapshot = WishlistSnapshot::from(&self.state);
        if let Err(e) = storage::save_json(self.storage.as_ref(), &self.key, &snapshot) {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist wishlist");
        }
    }

    fn dispatch(&mut self, action: WishlistAction) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
        self.persist();
    }

    /// Save `product`. Already-saved products keep their original timestamp.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_item(&mut self, product: Product) {
        let added_at = self.clock.now();
        self.dispatch(WishlistAction::AddItem { product, added_at });
    }

    #[instrument(skip(self))]
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.dispatch(WishlistAction::RemoveItem { product_id });
    }

    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.dispatch(WishlistAction::Clear);
    }

    /// Remove `product` if saved, otherwise save it.
    ///
    /// Returns whether the product is saved afterwards.
    pub fn toggle(&mut self, product: Product) -> bool {
        if self.is_in_wishlist(product.id) {
            self.remove_item(product.id);
            false
        } else {
            self.add_item(product);
            true
        }
    }

    #[must_use]
    pub fn is_in_wishlist(&self, product_id: ProductId) -> bool {
        self.state.contains(product_id)
    }

    #[must_use]
    pub fn items(&self) -> &[WishlistEntry] {
        &self.state.items
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.state.items.len()
    }

    #[must_use]
    pub const fn state(&self) -> &WishlistState {
        &self.state
    }
}

impl std::fmt::Debug for WishlistStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishlistStore")
            .field("key", &self.key)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
