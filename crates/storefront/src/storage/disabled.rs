//! Storage that is switched off.

use super::{LocalStorage, StorageError};

/// Every operation fails with [`StorageError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledStorage;

impl LocalStorage for DisabledStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}
