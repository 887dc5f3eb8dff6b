//! Client-local key/value storage.
//!
//! The cart and wishlist persist small JSON snapshots under namespaced keys,
//! the same way a browser app would use `localStorage`. Every operation
//! returns a [`Result`]; the stores decide to discard failures so that a full
//! or disabled storage degrades to an in-memory session instead of an error.
//!
//! # Implementations
//!
//! - [`MemoryStorage`] - process-local map, optionally with a per-value quota
//! - [`FileStorage`] - one JSON file per key under a data directory
//! - [`DisabledStorage`] - every call fails, like a browser with storage off

mod disabled;
mod file;
mod memory;
pub mod snapshot;

pub use disabled::DisabledStorage;
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use snapshot::{SnapshotError, load_json, save_json};

use thiserror::Error;

/// Errors returned by [`LocalStorage`] implementations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage is turned off or its backing resource is unusable.
    #[error("storage unavailable")]
    Unavailable,

    /// Key contains characters outside `[A-Za-z0-9_-]` or is empty.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Value is larger than the storage allows.
    #[error("quota exceeded writing {key} (limit {limit} bytes)")]
    QuotaExceeded { key: String, limit: usize },

    /// Filesystem error.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Synchronous string key/value storage.
pub trait LocalStorage: Send + Sync {
    /// Read the value stored under `key`, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the key is invalid or storage cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the key is invalid, the value exceeds a
    /// quota, or storage cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the key is invalid or storage cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage key names, derived from a namespace.
pub mod keys {
    /// Suffix of the cart snapshot key.
    pub const CART_SUFFIX: &str = "cart";

    /// Suffix of the wishlist snapshot key.
    pub const WISHLIST_SUFFIX: &str = "wishlist";

    /// Default namespace (`lepakshi_cart`, `lepakshi_wishlist`).
    pub const DEFAULT_NAMESPACE: &str = "lepakshi";

    /// Key holding the cart snapshot for `namespace`.
    #[must_use]
    pub fn cart(namespace: &str) -> String {
        format!("{namespace}_{CART_SUFFIX}")
    }

    /// Key holding the wishlist snapshot for `namespace`.
    #[must_use]
    pub fn wishlist(namespace: &str) -> String {
        format!("{namespace}_{WISHLIST_SUFFIX}")
    }
}

/// Check that `key` is non-empty and only uses `[A-Za-z0-9_-]`.
///
/// # Errors
///
/// Returns [`StorageError::InvalidKey`] otherwise.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
