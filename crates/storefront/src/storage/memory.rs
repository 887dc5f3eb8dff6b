//! In-memory storage.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{LocalStorage, StorageError, validate_key};

/// Process-local storage backed by a `HashMap`.
///
/// Used by tests and for sessions that should not outlive the process.
/// [`MemoryStorage::with_quota`] rejects values over a byte limit, which is
/// how a browser's quota error surfaces.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    /// Create empty storage with no quota.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create empty storage that rejects values longer than `limit` bytes.
    #[must_use]
    pub fn with_quota(limit: usize) -> Self {
        Self {
            items: RwLock::default(),
            quota: Some(limit),
        }
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.read().map_or(0, |items| items.len())
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let items = self.items.read().map_err(|_| StorageError::Unavailable)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        if let Some(limit) = self.quota.filter(|&limit| value.len() > limit) {
            return Err(StorageError::QuotaExceeded {
                key: key.to_string(),
                limit,
            });
        }
        let mut items = self.items.write().map_err(|_| StorageError::Unavailable)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut items = self.items.write().map_err(|_| StorageError::Unavailable)?;
        items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k").unwrap(), None);

        storage.set_item("k", "v1").unwrap();
        storage.set_item("k", "v2").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(storage.len(), 1);

        storage.remove_item("k").unwrap();
        assert!(storage.is_empty());
        storage.remove_item("k").unwrap();
    }

    #[test]
    fn test_quota() {
        let storage = MemoryStorage::with_quota(4);
        storage.set_item("k", "1234").unwrap();
        let err = storage.set_item("k", "12345").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { limit: 4, .. }));
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("1234"));
    }

    #[test]
    fn test_rejects_invalid_key() {
        let storage = MemoryStorage::new();
        assert!(matches!(
            storage.set_item("a/b", "v"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
