//! Integration tests for the Lepakshi storefront state layer.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lepakshi-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart snapshots on disk across sessions
//! - `wishlist_persistence` - Wishlist snapshots on disk across sessions
//! - `storefront_session` - Cart and wishlist together, custom catalogs
//!
//! Every test gets its own temporary data directory through [`TestContext`].

use std::io;
use std::path::PathBuf;

use lepakshi_core::Product;
use lepakshi_storefront::config::StorefrontConfig;
use lepakshi_storefront::error::Result;
use lepakshi_storefront::state::StorefrontState;
use tempfile::TempDir;

/// A throwaway data directory plus the configuration pointing at it.
#[derive(Debug)]
pub struct TestContext {
    dir: TempDir,
    pub config: StorefrontConfig,
}

impl TestContext {
    /// Create a context with the built-in catalog and default namespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let config = StorefrontConfig {
            data_dir: dir.path().join("state"),
            ..StorefrontConfig::default()
        };
        Ok(Self { dir, config })
    }

    /// Write `products` as a catalog file and point the configuration at it.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file cannot be written.
    pub fn use_catalog(&mut self, products: &[Product]) -> io::Result<()> {
        let path = self.dir.path().join("catalog.json");
        let json = serde_json::json!({ "products": products });
        std::fs::write(&path, json.to_string())?;
        self.config.catalog_path = Some(path);
        Ok(())
    }

    /// Open a fresh session on the context's data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured catalog cannot be loaded.
    pub fn open(&self) -> Result<StorefrontState> {
        StorefrontState::new(&self.config)
    }

    /// Path of the file backing a storage key.
    #[must_use]
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.config.data_dir.join(format!("{key}.json"))
    }

    /// Parsed contents of a storage key, if written.
    #[must_use]
    pub fn read_key(&self, key: &str) -> Option<serde_json::Value> {
        let text = std::fs::read_to_string(self.key_path(key)).ok()?;
        serde_json::from_str(&text).ok()
    }

    /// Overwrite a storage key with raw text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_key(&self, key: &str, contents: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.config.data_dir)?;
        std::fs::write(self.key_path(key), contents)
    }
}
