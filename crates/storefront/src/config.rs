//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `LEPAKSHI_DATA_DIR` - Directory holding persisted state (default: `.lepakshi`)
//! - `LEPAKSHI_STORAGE_NAMESPACE` - Storage key prefix (default: `lepakshi`)
//! - `LEPAKSHI_CATALOG_PATH` - JSON catalog to load instead of the built-in one

use std::path::PathBuf;

use thiserror::Error;

use crate::storage::{self, keys};

const DEFAULT_DATA_DIR: &str = ".lepakshi";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory for [`FileStorage`](crate::storage::FileStorage)
    pub data_dir: PathBuf,
    /// Prefix for storage keys (`<namespace>_cart`, `<namespace>_wishlist`)
    pub namespace: String,
    /// Catalog file replacing the built-in catalog
    pub catalog_path: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            namespace: keys::DEFAULT_NAMESPACE.to_string(),
            catalog_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the namespace is not a valid
    /// storage key fragment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let data_dir = get("LEPAKSHI_DATA_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let namespace = get("LEPAKSHI_STORAGE_NAMESPACE")
            .unwrap_or_else(|| keys::DEFAULT_NAMESPACE.to_string());
        storage::validate_key(&namespace).map_err(|e| {
            ConfigError::InvalidEnvVar("LEPAKSHI_STORAGE_NAMESPACE".to_string(), e.to_string())
        })?;
        let catalog_path = get("LEPAKSHI_CATALOG_PATH").map(PathBuf::from);

        Ok(Self {
            data_dir,
            namespace,
            catalog_path,
        })
    }
}
