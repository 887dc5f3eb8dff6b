//! Wishlist: a set of saved products with the time each was saved.
//!
//! Same shape as the cart - a pure reducer in [`state`], the persisted layout
//! in [`snapshot`], and [`WishlistStore`] on top - without any pricing.

pub mod snapshot;
pub mod state;
pub mod store;

pub use snapshot::{WishlistSnapshot, WishlistSnapshotItem};
pub use state::{WishlistAction, WishlistEntry, WishlistState};
pub use store::WishlistStore;
