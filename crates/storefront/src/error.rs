//! Unified error handling.
//!
//! Store mutations never fail; storage problems are logged and swallowed at
//! the store boundary. `AppError` covers what is left: startup (configuration,
//! catalog loading) and caller mistakes such as unknown products.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from the caller.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Whether the error was caused by caller input rather than the environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::BadRequest(_))
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
