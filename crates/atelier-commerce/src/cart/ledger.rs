//! The cart ledger: the authoritative in-session set of line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::item::{CartLineItem, CartProductRef};
use crate::cart::pricing::{self, PricingResult};
use crate::catalog::CatalogProduct;
use crate::ids::ProductId;
use crate::money::Money;
use crate::settings::StoreSettings;

/// A shopping cart.
///
/// Invariant: no two lines share a `(product_id, size, color)` identity key.
/// Adding a matching key merges quantities; distinct keys append, preserving
/// insertion order. Malformed calls (blank ids) are silent no-ops.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Line items, insertion-ordered.
    pub items: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a selection to the cart.
    ///
    /// If a line with the same `(product_id, size, color)` key exists its
    /// quantity grows by `quantity` and its recorded price is left alone.
    /// Otherwise a new line is appended with the price captured from the
    /// product now. Quantities below 1 are clamped to 1. A product without a
    /// resolvable id is ignored.
    pub fn add_item(
        &mut self,
        product: &CatalogProduct,
        quantity: i64,
        size: impl Into<String>,
        color: impl Into<String>,
    ) {
        if product.id.is_blank() {
            return;
        }
        let quantity = quantity.max(1);
        let size = size.into();
        let color = color.into();

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.matches(&product.id, &size, &color))
        {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return;
        }

        self.items.push(CartLineItem {
            product: CartProductRef::from(product),
            quantity,
            size,
            color,
            unit_price_at_add: product.price,
        });
    }

    /// Remove every line for a product, across all sizes and colors.
    ///
    /// No-op on a blank or unknown id.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        if product_id.is_blank() {
            return;
        }
        self.items.retain(|i| &i.product.id != product_id);
    }

    /// Set the quantity on every line for a product.
    ///
    /// Requests below 1 clamp to 1; removal goes through
    /// [`remove_item`](Cart::remove_item). No-op on a blank or unknown id.
    pub fn update_item_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if product_id.is_blank() {
            return;
        }
        for item in self.items.iter_mut().filter(|i| &i.product.id == product_id) {
            item.quantity = quantity.max(1);
        }
    }

    /// Empty the ledger.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Check if the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn unique_line_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across all lines.
    pub fn total_item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of `unit_price_at_add * quantity` across all lines, unrounded.
    ///
    /// The store is single-currency; the subtotal takes its currency from the
    /// first line and an empty cart prices to zero.
    pub fn subtotal(&self) -> Money {
        let currency = self
            .items
            .first()
            .map(|i| i.unit_price_at_add.currency)
            .unwrap_or_default();
        let amount = self
            .items
            .iter()
            .fold(Decimal::ZERO, |acc, i| acc + i.line_subtotal().amount);
        Money::new(amount, currency)
    }

    /// Price this cart under a settings snapshot.
    pub fn pricing(&self, settings: &StoreSettings) -> PricingResult {
        pricing::quote(self.subtotal(), settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;
    use rust_decimal_macros::dec;

    fn product(id: &str, price: Decimal) -> CatalogProduct {
        CatalogProduct {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Money::new(price, Currency::USD),
            image: String::new(),
            description: String::new(),
            category: "tshirts".to_string(),
            colors: vec!["White".to_string()],
            sizes: vec!["M".to_string()],
            in_stock: true,
            featured: false,
        }
    }

    #[test]
    fn test_add_merges_on_identity_key() {
        let mut cart = Cart::new();
        let shirt = product("p1", dec!(24.99));

        cart.add_item(&shirt, 1, "M", "White");
        cart.add_item(&shirt, 2, "M", "White");

        assert_eq!(cart.unique_line_count(), 1);
        assert_eq!(cart.total_item_count(), 3);
    }

    #[test]
    fn test_different_size_or_color_appends() {
        let mut cart = Cart::new();
        let shirt = product("p1", dec!(24.99));

        cart.add_item(&shirt, 1, "M", "White");
        cart.add_item(&shirt, 1, "L", "White");
        cart.add_item(&shirt, 1, "M", "Black");

        assert_eq!(cart.unique_line_count(), 3);
        // insertion order preserved
        assert_eq!(cart.items[1].size, "L");
        assert_eq!(cart.items[2].color, "Black");
    }

    #[test]
    fn test_price_captured_at_add_is_stable() {
        let mut cart = Cart::new();
        let mut shirt = product("p1", dec!(24.99));
        cart.add_item(&shirt, 1, "M", "White");

        // catalog price changes mid-session
        shirt.price = Money::new(dec!(39.99), Currency::USD);
        cart.add_item(&shirt, 1, "M", "White");

        assert_eq!(cart.items[0].unit_price_at_add.amount, dec!(24.99));
        assert_eq!(cart.subtotal().amount, dec!(49.98));
    }

    #[test]
    fn test_add_without_id_is_noop() {
        let mut cart = Cart::new();
        let ghost = CatalogProduct {
            id: ProductId::new(""),
            ..product("p1", dec!(10))
        };
        cart.add_item(&ghost, 1, "M", "White");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_clamps_quantity_to_one() {
        let mut cart = Cart::new();
        cart.add_item(&product("p1", dec!(10)), 0, "M", "White");
        assert_eq!(cart.total_item_count(), 1);
    }

    #[test]
    fn test_remove_drops_all_sizes_and_colors() {
        let mut cart = Cart::new();
        let shirt = product("p1", dec!(24.99));
        let jeans = product("p2", dec!(59.99));
        cart.add_item(&shirt, 1, "M", "White");
        cart.add_item(&shirt, 1, "L", "Black");
        cart.add_item(&jeans, 1, "32", "Blue");

        cart.remove_item(&ProductId::new("p1"));

        assert_eq!(cart.unique_line_count(), 1);
        assert_eq!(cart.items[0].product.id.as_str(), "p2");
    }

    #[test]
    fn test_remove_unknown_or_blank_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&product("p1", dec!(10)), 1, "M", "White");
        cart.remove_item(&ProductId::new("p9"));
        cart.remove_item(&ProductId::new(""));
        assert_eq!(cart.unique_line_count(), 1);
    }

    #[test]
    fn test_quantity_floor() {
        let mut cart = Cart::new();
        cart.add_item(&product("p1", dec!(10)), 3, "M", "White");

        cart.update_item_quantity(&ProductId::new("p1"), 0);
        assert_eq!(cart.total_item_count(), 1);

        cart.update_item_quantity(&ProductId::new("p1"), -5);
        assert_eq!(cart.total_item_count(), 1);

        cart.update_item_quantity(&ProductId::new("p1"), 4);
        assert_eq!(cart.total_item_count(), 4);
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&product("p1", dec!(10)), 2, "M", "White");
        cart.update_item_quantity(&ProductId::new("p9"), 7);
        assert_eq!(cart.total_item_count(), 2);
    }

    #[test]
    fn test_subtotal_and_clear() {
        let mut cart = Cart::new();
        cart.add_item(&product("p1", dec!(24.99)), 2, "M", "White");
        cart.add_item(&product("p2", dec!(59.99)), 1, "32", "Blue");

        assert_eq!(cart.subtotal().amount, dec!(109.97));

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.subtotal().is_zero());
    }
}
