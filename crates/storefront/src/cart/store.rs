//! The cart store: reducer state plus hydration and persistence.

use std::sync::Arc;

use lepakshi_core::{Price, Product, ProductId, PromoCode};
use tracing::instrument;

use super::promo;
use super::snapshot::CartSnapshot;
use super::state::{CartAction, CartLineItem, CartState};
use super::totals::CartTotals;
use crate::catalog::ProductCatalog;
use crate::storage::{self, LocalStorage};

/// Quantity used when a shopper adds a product without choosing one.
pub const DEFAULT_ADD_QUANTITY: u32 = 1;

/// Session cart.
///
/// Construction hydrates from storage; every mutation dispatches a
/// [`CartAction`] through the reducer and writes the new snapshot back.
/// Storage failures are logged and otherwise ignored, so the cart keeps
/// working in memory when storage is full or switched off.
pub struct CartStore {
    state: CartState,
    catalog: Arc<dyn ProductCatalog>,
    storage: Arc<dyn LocalStorage>,
    key: String,
}

impl CartStore {
    /// Create a cart persisted under `key`, hydrated from whatever is stored there.
    pub fn new(
        catalog: Arc<dyn ProductCatalog>,
        storage: Arc<dyn LocalStorage>,
        key: impl Into<String>,
    ) -> Self {
        let mut store = Self {
            state: CartState::default(),
            catalog,
            storage,
            key: key.into(),
        };
        if let Some(state) = store.load() {
            store.state = store.state.reduce(CartAction::Load(state));
        }
        store
    }

    fn load(&self) -> Option<CartState> {
        match storage::load_json::<CartSnapshot>(self.storage.as_ref(), &self.key) {
            Ok(Some(snapshot)) => {
                let state = snapshot.hydrate(self.catalog.as_ref());
                tracing::debug!(key = %self.key, items = state.items.len(), "Hydrated cart");
                Some(state)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::debug!(key = %self.key, error = %e, "Ignoring unreadable cart snapshot");
                None
            }
        }
    }

    fn persist(&self) {
        let snapshot = CartSnapshot::from(&self.state);
        if let Err(e) = storage::save_json(self.storage.as_ref(), &self.key, &snapshot) {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist cart");
        }
    }

    fn dispatch(&mut self, action: CartAction) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
        self.persist();
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add `quantity` of `product`. Merging into an existing line caps it at 10.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_item(&mut self, product: Product, quantity: u32) {
        self.dispatch(CartAction::AddItem { product, quantity });
    }

    #[instrument(skip(self))]
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.dispatch(CartAction::RemoveItem { product_id });
    }

    /// Set a line's quantity, capped at 10. Zero or below removes the line.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        self.dispatch(CartAction::UpdateQuantity {
            product_id,
            quantity,
        });
    }

    /// Empty the cart and drop any promo.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    /// Validate `code` against the promo table and apply it.
    ///
    /// Returns `false`, leaving the cart untouched, if the code is blank or
    /// unknown. Matching ignores case and surrounding whitespace.
    #[instrument(skip(self))]
    pub fn apply_promo(&mut self, code: &str) -> bool {
        let Ok(code) = PromoCode::parse(code) else {
            return false;
        };
        let Some(discount_percent) = promo::discount_for(&code) else {
            tracing::debug!(code = %code, "Rejected unknown promo code");
            return false;
        };
        self.dispatch(CartAction::ApplyPromo {
            code: code.into_inner(),
            discount_percent,
        });
        true
    }

    #[instrument(skip(self))]
    pub fn remove_promo(&mut self) {
        self.dispatch(CartAction::RemovePromo);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn is_in_cart(&self, product_id: ProductId) -> bool {
        self.state.line(product_id).is_some()
    }

    /// Quantity of `product_id` in the cart, zero if absent.
    #[must_use]
    pub fn item_quantity(&self, product_id: ProductId) -> u32 {
        self.state.line(product_id).map_or(0, |item| item.quantity)
    }

    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.state.items
    }

    #[must_use]
    pub fn promo_code(&self) -> Option<&str> {
        self.state.promo_code.as_deref()
    }

    #[must_use]
    pub const fn promo_discount_percent(&self) -> u8 {
        self.state.promo_discount_percent
    }

    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    // =========================================================================
    // Derived values (recomputed on every call)
    // =========================================================================

    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals::from_state(&self.state)
    }

    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.totals().subtotal
    }

    #[must_use]
    pub fn savings(&self) -> Price {
        self.totals().savings
    }

    #[must_use]
    pub fn shipping(&self) -> Price {
        self.totals().shipping
    }

    #[must_use]
    pub fn total(&self) -> Price {
        self.totals().total
    }

    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.totals().item_count
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("key", &self.key)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::storage::{DisabledStorage, MemoryStorage};

    const KEY: &str = "lepakshi_cart";

    struct Fixture {
        catalog: Arc<Catalog>,
        storage: Arc<MemoryStorage>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                catalog: Arc::new(Catalog::builtin().unwrap()),
                storage: Arc::new(MemoryStorage::new()),
            }
        }

        fn store(&self) -> CartStore {
            CartStore::new(self.catalog.clone(), self.storage.clone(), KEY)
        }

        fn product(&self, id: i32) -> Product {
            self.catalog.product(ProductId::new(id)).unwrap().clone()
        }

        fn stored_json(&self) -> serde_json::Value {
            serde_json::from_str(&self.storage.get_item(KEY).unwrap().unwrap()).unwrap()
        }
    }

    #[test]
    fn test_starts_empty_without_snapshot() {
        let fx = Fixture::new();
        let store = fx.store();
        assert!(store.items().is_empty());
        assert_eq!(store.promo_code(), None);
        assert!(fx.storage.is_empty());
    }

    #[test]
    fn test_add_then_quantity() {
        let fx = Fixture::new();
        for quantity in 1..=10 {
            let mut store = fx.store();
            store.clear();
            store.add_item(fx.product(1), quantity);
            assert_eq!(store.item_quantity(ProductId::new(1)), quantity);
        }
    }

    #[test]
    fn test_add_twice_merges_with_cap() {
        let fx = Fixture::new();
        let mut store = fx.store();
        store.add_item(fx.product(1), 6);
        store.add_item(fx.product(1), 7);
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.item_quantity(ProductId::new(1)), 10);
    }

    #[test]
    fn test_update_to_zero_removes() {
        let fx = Fixture::new();
        let mut store = fx.store();
        store.add_item(fx.product(1), 2);
        store.update_quantity(ProductId::new(1), 0);
        assert!(!store.is_in_cart(ProductId::new(1)));
        assert_eq!(store.item_quantity(ProductId::new(1)), 0);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let fx = Fixture::new();
        let mut store = fx.store();
        store.add_item(fx.product(1), 2);
        let before = store.state().clone();
        store.remove_item(ProductId::new(42));
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_apply_known_promo() {
        let fx = Fixture::new();
        let mut store = fx.store();
        store.add_item(fx.product(5), 1); // 350
        let subtotal = store.subtotal();
        let before = store.total();

        assert!(store.apply_promo("welcome10"));
        assert_eq!(store.promo_code(), Some("WELCOME10"));
        assert_eq!(store.promo_discount_percent(), 10);
        assert_eq!(before - store.total(), subtotal.percent(10));
    }

    #[test]
    fn test_apply_unknown_promo_leaves_state() {
        let fx = Fixture::new();
        let mut store = fx.store();
        assert!(store.apply_promo("CRAFT20"));

        assert!(!store.apply_promo("XYZ123"));
        assert!(!store.apply_promo("   "));
        assert_eq!(store.promo_code(), Some("CRAFT20"));
        assert_eq!(store.promo_discount_percent(), 20);
    }

    #[test]
    fn test_remove_promo() {
        let fx = Fixture::new();
        let mut store = fx.store();
        assert!(store.apply_promo("FESTIVE15"));
        store.remove_promo();
        assert_eq!(store.promo_code(), None);
        assert_eq!(store.promo_discount_percent(), 0);
    }

    #[test]
    fn test_persists_references_only() {
        let fx = Fixture::new();
        let mut store = fx.store();
        store.add_item(fx.product(1), 2);
        assert!(store.apply_promo("craft20"));

        assert_eq!(
            fx.stored_json(),
            serde_json::json!({
                "items": [{"productId": 1, "quantity": 2}],
                "promoCode": "CRAFT20",
                "promoDiscountPercent": 20
            })
        );
    }

    #[test]
    fn test_new_store_hydrates_previous_session() {
        let fx = Fixture::new();
        let mut store = fx.store();
        store.add_item(fx.product(1), 2);
        store.add_item(fx.product(7), 3);
        assert!(store.apply_promo("CRAFT20"));

        let rehydrated = fx.store();
        assert_eq!(rehydrated.state(), store.state());
    }

    #[test]
    fn test_stale_product_dropped_on_hydrate() {
        let fx = Fixture::new();
        fx.storage
            .set_item(
                KEY,
                r#"{"items":[{"productId":1,"quantity":1},{"productId":404,"quantity":2}],
                    "promoCode":null,"promoDiscountPercent":0}"#,
            )
            .unwrap();
        let store = fx.store();
        assert_eq!(store.items().len(), 1);
        assert!(store.is_in_cart(ProductId::new(1)));
        assert!(!store.is_in_cart(ProductId::new(404)));
    }

    #[test]
    fn test_corrupt_snapshot_falls_back_to_empty() {
        let fx = Fixture::new();
        fx.storage.set_item(KEY, "{\"items\": [").unwrap();
        let mut store = fx.store();
        assert!(store.items().is_empty());

        // The next write replaces the corrupt value.
        store.add_item(fx.product(1), 1);
        assert_eq!(fx.stored_json()["items"][0]["productId"], 1);
    }

    #[test]
    fn test_disabled_storage_keeps_working_in_memory() {
        let catalog: Arc<dyn ProductCatalog> = Arc::new(Catalog::builtin().unwrap());
        let mut store = CartStore::new(catalog.clone(), Arc::new(DisabledStorage), KEY);
        let product = catalog.product_by_id(ProductId::new(1)).unwrap();

        store.add_item(product, 2);
        assert!(store.apply_promo("WELCOME10"));
        assert_eq!(store.item_quantity(ProductId::new(1)), 2);
        assert_eq!(store.promo_discount_percent(), 10);
    }

    #[test]
    fn test_quota_exceeded_keeps_memory_state() {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let storage = Arc::new(MemoryStorage::with_quota(8));
        let mut store = CartStore::new(catalog.clone(), storage.clone(), KEY);

        store.add_item(catalog.product(ProductId::new(1)).unwrap().clone(), 1);
        assert!(store.is_in_cart(ProductId::new(1)));
        assert!(storage.is_empty());
    }

    #[test]
    fn test_example_scenario() {
        let fx = Fixture::new();
        let mut store = fx.store();
        let mut product_a = fx.product(1);
        product_a.price = Price::from_major(500);
        product_a.original_price = None;
        let mut product_b = fx.product(2);
        product_b.price = Price::from_major(600);
        product_b.original_price = None;

        store.add_item(product_a, 2);
        store.add_item(product_b, 1);
        assert_eq!(store.subtotal(), Price::from_major(1600));
        assert_eq!(store.shipping(), Price::ZERO);

        assert!(store.apply_promo("CRAFT20"));
        assert_eq!(store.total(), Price::from_major(1280));
        assert_eq!(store.item_count(), 3);
    }
}
