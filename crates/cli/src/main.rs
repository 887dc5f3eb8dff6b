//! Lepakshi CLI - Inspect the catalog and manage a persisted cart and wishlist.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! lk-cli catalog list --category wood
//! lk-cli catalog show rudraksha-mala
//!
//! # Build a cart
//! lk-cli cart add 1 -q 2
//! lk-cli cart promo craft20
//! lk-cli cart show
//!
//! # Save for later, then move to the cart
//! lk-cli wishlist toggle 12
//! lk-cli wishlist move-to-cart 12
//! ```
//!
//! # Commands
//!
//! - `catalog` - List, show, and feature products
//! - `cart` - Add, update, remove, and price cart items; apply promo codes
//! - `wishlist` - Save and unsave products; move them to the cart
//!
//! State is stored as JSON files under `--data-dir` (or `LEPAKSHI_DATA_DIR`).
//! Logs go to stderr; set `RUST_LOG` to change the level. Exits with status 2
//! on bad input such as an unknown product and 1 on any other failure.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lepakshi_storefront::config::StorefrontConfig;
use lepakshi_storefront::error::{AppError, Result};
use lepakshi_storefront::state::StorefrontState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "lk-cli")]
#[command(author, version, about = "Lepakshi storefront cart and wishlist tools")]
struct Cli {
    /// Directory holding the persisted cart and wishlist
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Catalog JSON file to use instead of the built-in catalog
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogCommand,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartCommand,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistCommand,
    },
}

#[derive(Subcommand)]
enum CatalogCommand {
    /// List products
    List {
        /// Only products in this category (ID or slug)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one product with related products
    Show {
        /// Product ID or slug
        product: String,
    },
    /// List featured products
    Featured,
}

#[derive(Subcommand)]
enum CartCommand {
    /// Show cart contents and totals
    Show,
    /// Add a product
    Add {
        /// Product ID or slug
        product: String,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product
    Remove {
        /// Product ID or slug
        product: String,
    },
    /// Set the quantity of a line (0 or less removes it)
    Update {
        /// Product ID or slug
        product: String,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
    /// Apply a promo code
    Promo {
        /// Promo code (case-insensitive)
        code: String,
    },
    /// Remove the applied promo code
    RemovePromo,
}

#[derive(Subcommand)]
enum WishlistCommand {
    /// Show saved products
    Show,
    /// Save a product, or unsave it if already saved
    Toggle {
        /// Product ID or slug
        product: String,
    },
    /// Save a product
    Add {
        /// Product ID or slug
        product: String,
    },
    /// Unsave a product
    Remove {
        /// Product ID or slug
        product: String,
    },
    /// Remove all saved products
    Clear,
    /// Add a saved product to the cart and unsave it
    MoveToCart {
        /// Product ID or slug
        product: String,
    },
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        if e.is_user_error() {
            tracing::warn!("{e}");
        } else {
            tracing::error!("Command failed: {e}");
        }
        std::process::exit(exit_code(&e));
    }
}

/// `2` for bad input (unknown product, invalid promo code), `1` otherwise.
const fn exit_code(error: &AppError) -> i32 {
    if error.is_user_error() { 2 } else { 1 }
}

/// Log to stderr so command output on stdout stays clean.
///
/// `RUST_LOG` overrides the default filter; `LEPAKSHI_LOG_FORMAT=json` switches
/// to one JSON object per event.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "lepakshi_storefront=info,lk_cli=info".into());

    let is_json = std::env::var("LEPAKSHI_LOG_FORMAT").is_ok_and(|format| format == "json");
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = StorefrontConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(catalog) = cli.catalog {
        config.catalog_path = Some(catalog);
    }

    let mut state = StorefrontState::new(&config)?;

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogCommand::List { category } => {
                commands::catalog::list(&state, category.as_deref())?;
            }
            CatalogCommand::Show { product } => commands::catalog::show(&state, &product)?,
            CatalogCommand::Featured => commands::catalog::featured(&state),
        },
        Commands::Cart { action } => match action {
            CartCommand::Show => commands::cart::show(&state),
            CartCommand::Add { product, quantity } => {
                commands::cart::add(&mut state, &product, quantity)?;
            }
            CartCommand::Remove { product } => commands::cart::remove(&mut state, &product)?,
            CartCommand::Update { product, quantity } => {
                commands::cart::update(&mut state, &product, quantity)?;
            }
            CartCommand::Clear => commands::cart::clear(&mut state),
            CartCommand::Promo { code } => commands::cart::apply_promo(&mut state, &code)?,
            CartCommand::RemovePromo => commands::cart::remove_promo(&mut state),
        },
        Commands::Wishlist { action } => match action {
            WishlistCommand::Show => commands::wishlist::show(&state),
            WishlistCommand::Toggle { product } => {
                commands::wishlist::toggle(&mut state, &product)?;
            }
            WishlistCommand::Add { product } => commands::wishlist::add(&mut state, &product)?,
            WishlistCommand::Remove { product } => {
                commands::wishlist::remove(&mut state, &product)?;
            }
            WishlistCommand::Clear => commands::wishlist::clear(&mut state),
            WishlistCommand::MoveToCart { product } => {
                commands::wishlist::move_to_cart(&mut state, &product)?;
            }
        },
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lepakshi_storefront::config::ConfigError;

    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&AppError::NotFound("product 99".to_string())), 2);
        assert_eq!(exit_code(&AppError::BadRequest("bad code".to_string())), 2);

        let config = AppError::from(ConfigError::InvalidEnvVar(
            "LEPAKSHI_STORAGE_NAMESPACE".to_string(),
            "a/b".to_string(),
        ));
        assert_eq!(exit_code(&config), 1);
    }

    #[test]
    fn test_cli_parses_negative_update() {
        let cli = Cli::try_parse_from(["lk-cli", "cart", "update", "3", "-1"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Cart {
                action: CartCommand::Update { quantity: -1, .. }
            }
        ));
    }
}
