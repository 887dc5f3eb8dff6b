//! Shopping cart.
//!
//! # Layers
//!
//! - [`state`] - `CartState` and the pure `reduce` transition over `CartAction`
//! - [`promo`] - compiled-in promo code table
//! - [`totals`] - subtotal, savings, shipping and total, derived on read
//! - [`snapshot`] - persisted layout and hydration against the catalog
//! - [`store`] - `CartStore`, the API the rest of the storefront calls
//!
//! # Example
//!
//! ```rust,ignore
//! let mut cart = CartStore::new(catalog, storage, storage::keys::cart("lepakshi"));
//! cart.add_item(product, 2);
//! if !cart.apply_promo("welcome10") {
//!     // show "invalid code"
//! }
//! let totals = cart.totals();
//! ```

pub mod promo;
pub mod snapshot;
pub mod state;
pub mod store;
pub mod totals;

pub use promo::PROMO_CODES;
pub use snapshot::{CartSnapshot, CartSnapshotItem};
pub use state::{CartAction, CartLineItem, CartState, MAX_LINE_QUANTITY};
pub use store::{CartStore, DEFAULT_ADD_QUANTITY};
pub use totals::{CartTotals, FREE_SHIPPING_THRESHOLD, SHIPPING_COST};
