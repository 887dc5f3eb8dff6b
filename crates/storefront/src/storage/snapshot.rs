//! JSON snapshot helpers on top of [`LocalStorage`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::{LocalStorage, StorageError};

/// Failure reading or writing a JSON snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load and parse the JSON value stored under `key`.
///
/// Returns `Ok(None)` when the key is absent.
///
/// # Errors
///
/// Returns [`SnapshotError`] if storage fails or the value does not parse as `T`.
pub fn load_json<T: DeserializeOwned>(
    storage: &dyn LocalStorage,
    key: &str,
) -> Result<Option<T>, SnapshotError> {
    let Some(raw) = storage.get_item(key)? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Serialize `value` to JSON and store it under `key`.
///
/// # Errors
///
/// Returns [`SnapshotError`] if serialization or the storage write fails.
pub fn save_json<T: Serialize>(
    storage: &dyn LocalStorage,
    key: &str,
    value: &T,
) -> Result<(), SnapshotError> {
    let raw = serde_json::to_string(value)?;
    storage.set_item(key, &raw)?;
    Ok(())
}

/// `deserialize_with` for snapshot lists: entries that do not parse as `T` are
/// skipped so one bad entry does not discard the rest.
///
/// # Errors
///
/// Fails only when the value is not a JSON array.
pub fn skip_invalid_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping unreadable snapshot entry");
                None
            }
        })
        .collect())
}
