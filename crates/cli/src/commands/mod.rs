//! Subcommand implementations.
//!
//! Each command formats its output into lines first and prints them at the
//! end, so the formatting can be tested without capturing stdout.

pub mod cart;
pub mod catalog;
pub mod wishlist;

use std::fmt::Write as _;

use lepakshi_core::Product;

/// Print lines to stdout.
#[allow(clippy::print_stdout)]
fn emit(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

/// One-line product summary: ID, name, price, and list price when discounted.
fn product_row(product: &Product) -> String {
    let mut row = format!(
        "{:>4}  {}  {}",
        product.id.as_i32(),
        product.name,
        product.price
    );
    let discount = product.discount_percent();
    if discount > 0 {
        let _ = write!(row, " (was {}, {discount}% off)", product.list_price());
    }
    if let Some(tag) = &product.tag {
        let _ = write!(row, " [{tag}]");
    }
    if !product.in_stock {
        row.push_str(" - out of stock");
    }
    row
}
