//! The per-session shopping cart aggregate.
//!
//! A [`Cart`] maps product identities to quantities and exposes them as an
//! ordered sequence of [`CartLine`]s. It is ephemeral state scoped to one
//! user's session: created empty, mutated through [`Cart::add_item`] /
//! [`Cart::remove_line`] / [`Cart::clear`], and discarded at session end. A
//! cart is owned by a single writer; it defines no internal locking. The
//! surrounding session layer is responsible for persisting it across
//! requests if required - everything here serializes for that purpose.

use serde::{Deserialize, Serialize};

use summit_outfitters_core::{CurrencyCode, Price, ProductId};

use crate::catalog::Product;

/// One product/quantity pair within a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Snapshot of the product taken when it was first added.
    pub product: Product,
    /// Number of units; always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// The value of this line (quantity x unit price), as an exact decimal.
    #[must_use]
    pub fn line_value(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Per-session shopping cart.
///
/// Lines keep the insertion order of the first-seen product; re-adding an
/// existing product accumulates quantity without moving its line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add `quantity` units of `product`.
    ///
    /// When a line for the product's identity already exists its quantity is
    /// incremented and the first-seen product snapshot and position are
    /// kept; otherwise a new line is appended. Adding zero units leaves the
    /// cart unchanged - a quantity below one never produces or keeps a line.
    pub fn add_item(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine { product, quantity }),
        }
    }

    /// Remove the line whose product identity matches, if any.
    ///
    /// A cart without such a line is left unchanged.
    pub fn remove_line(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product.id != product_id);
    }

    /// The ordered line items.
    ///
    /// Read-only view; mutation goes through [`Cart::add_item`],
    /// [`Cart::remove_line`], and [`Cart::clear`].
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of line values over the whole cart, as an exact decimal.
    ///
    /// An empty cart totals zero in the store's default currency.
    #[must_use]
    pub fn total_value(&self) -> Price {
        let currency_code = self
            .lines
            .first()
            .map_or_else(CurrencyCode::default, |line| {
                line.product.price.currency_code
            });
        self.lines
            .iter()
            .fold(Price::zero(currency_code), |total, line| {
                total + line.line_value()
            })
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Remove every line. The cart stays usable.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use summit_outfitters_core::CurrencyCode;

    use super::*;

    fn product(id: i32, name: &str, dollars: i64) -> Product {
        Product::new(name, Price::from_cents(dollars * 100, CurrencyCode::USD))
            .with_id(ProductId::new(id))
    }

    #[test]
    fn test_add_new_lines() {
        let p1 = product(1, "P1", 10);
        let p2 = product(2, "P2", 10);

        let mut cart = Cart::new();
        cart.add_item(p1.clone(), 1);
        cart.add_item(p2.clone(), 1);

        let lines = cart.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product, p1);
        assert_eq!(lines[1].product, p2);
    }

    #[test]
    fn test_accumulates_quantity_for_existing_lines() {
        let p1 = product(1, "P1", 10);
        let p2 = product(2, "P2", 10);

        let mut cart = Cart::new();
        cart.add_item(p1.clone(), 1);
        cart.add_item(p2, 1);
        cart.add_item(p1, 10);

        let lines = cart.lines();
        assert_eq!(lines.len(), 2);
        // Merged into the existing line, which kept its position.
        assert_eq!(lines[0].product.id, ProductId::new(1));
        assert_eq!(lines[0].quantity, 11);
        assert_eq!(lines[1].quantity, 1);
    }

    #[test]
    fn test_merge_keeps_first_seen_snapshot() {
        let original = product(1, "Kayak", 275);
        let repriced = product(1, "Kayak", 300);

        let mut cart = Cart::new();
        cart.add_item(original.clone(), 1);
        cart.add_item(repriced, 2);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.lines()[0].product.price, original.price);
    }

    #[test]
    fn test_remove_line() {
        let p1 = product(1, "P1", 10);
        let p2 = product(2, "P2", 10);
        let p3 = product(3, "P3", 10);

        let mut cart = Cart::new();
        cart.add_item(p1, 1);
        cart.add_item(p2.clone(), 3);
        cart.add_item(p3, 5);
        cart.add_item(p2, 1);

        cart.remove_line(ProductId::new(2));

        assert_eq!(cart.lines().len(), 2);
        assert!(
            cart.lines()
                .iter()
                .all(|line| line.product.id != ProductId::new(2))
        );
    }

    #[test]
    fn test_remove_absent_line_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(product(1, "P1", 10), 2);

        cart.remove_line(ProductId::new(42));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_total_value() {
        let p1 = product(1, "P1", 100);
        let p2 = product(2, "P2", 50);

        let mut cart = Cart::new();
        cart.add_item(p1.clone(), 1);
        cart.add_item(p2, 1);
        cart.add_item(p1, 3);

        assert_eq!(cart.total_value().amount, Decimal::from(450));
    }

    #[test]
    fn test_empty_cart_totals_exact_zero() {
        let cart = Cart::new();
        assert_eq!(cart.total_value().amount, Decimal::ZERO);
        assert_eq!(cart.item_count(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_leaves_usable_empty_cart() {
        let p1 = product(1, "P1", 100);

        let mut cart = Cart::new();
        cart.add_item(p1.clone(), 1);
        cart.add_item(product(2, "P2", 50), 1);

        cart.clear();
        assert!(cart.lines().is_empty());

        // Still usable after clearing.
        cart.add_item(p1, 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_zero_quantity_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(product(1, "P1", 10), 0);
        assert!(cart.is_empty());

        cart.add_item(product(1, "P1", 10), 2);
        cart.add_item(product(1, "P1", 10), 0);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut cart = Cart::new();
        cart.add_item(product(1, "P1", 10), 2);
        cart.add_item(product(2, "P2", 10), 5);
        cart.add_item(product(1, "P1", 10), 1);

        assert_eq!(cart.item_count(), 8);
        assert_eq!(cart.lines().len(), 2);
    }
}
