//! Integration tests for a whole shopper session: cart and wishlist sharing
//! one data directory, namespaces, and catalog configuration.

use lepakshi_core::ProductId;
use lepakshi_integration_tests::TestContext;
use lepakshi_storefront::error::AppError;

fn id(id: i32) -> ProductId {
    ProductId::new(id)
}

#[test]
fn test_move_to_cart_persists_both_stores() {
    let ctx = TestContext::new().unwrap();

    let mut session = ctx.open().unwrap();
    let mala = session.find_product("rudraksha-mala").unwrap().clone();
    session.wishlist_mut().add_item(mala);
    session.move_to_cart(id(12)).unwrap();
    drop(session);

    let session = ctx.open().unwrap();
    assert!(!session.wishlist().is_in_wishlist(id(12)));
    assert_eq!(session.cart().item_quantity(id(12)), 1);
}

#[test]
fn test_namespaces_are_isolated() {
    let mut ctx = TestContext::new().unwrap();

    let mut session = ctx.open().unwrap();
    let product = session.product(id(1)).unwrap().clone();
    session.cart_mut().add_item(product, 2);
    drop(session);

    ctx.config.namespace = "guest".to_string();
    let session = ctx.open().unwrap();
    assert_eq!(session.cart().item_count(), 0);
    assert!(ctx.key_path("lepakshi_cart").exists());
    assert!(!ctx.key_path("guest_cart").exists());
}

#[test]
fn test_nothing_written_until_first_change() {
    let ctx = TestContext::new().unwrap();

    let session = ctx.open().unwrap();
    assert_eq!(session.cart().item_count(), 0);
    assert!(!ctx.config.data_dir.exists());
}

#[test]
fn test_missing_catalog_file_is_an_error() {
    let mut ctx = TestContext::new().unwrap();
    ctx.config.catalog_path = Some(ctx.config.data_dir.join("missing.json"));

    assert!(matches!(ctx.open(), Err(AppError::Catalog(_))));
}
