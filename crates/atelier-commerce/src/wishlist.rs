//! Wishlist: a saved-for-later product set.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogProduct;
use crate::ids::ProductId;

/// Products the customer has saved, at most one entry per product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    pub items: Vec<CatalogProduct>,
}

impl Wishlist {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a product. Already-saved products are left alone.
    pub fn add(&mut self, product: CatalogProduct) {
        if product.id.is_blank() || self.contains(&product.id) {
            return;
        }
        self.items.push(product);
    }

    /// Remove a product by id. No-op on unknown ids.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.items.retain(|p| &p.id != product_id);
    }

    /// Check whether a product is saved.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.id == product_id)
    }

    /// Add the product if absent, remove it if present.
    ///
    /// Returns `true` when the product ended up saved.
    pub fn toggle(&mut self, product: CatalogProduct) -> bool {
        if self.contains(&product.id) {
            self.remove(&product.id);
            false
        } else {
            self.add(product);
            true
        }
    }

    /// Drop every saved product.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};
    use rust_decimal_macros::dec;

    fn product(id: &str) -> CatalogProduct {
        CatalogProduct {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Money::new(dec!(24.99), Currency::USD),
            image: String::new(),
            description: String::new(),
            category: "tshirts".to_string(),
            colors: vec![],
            sizes: vec![],
            in_stock: true,
            featured: false,
        }
    }

    #[test]
    fn test_add_deduplicates_by_id() {
        let mut wishlist = Wishlist::new();
        wishlist.add(product("p1"));
        wishlist.add(product("p1"));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_add_blank_id_is_noop() {
        let mut wishlist = Wishlist::new();
        wishlist.add(product(""));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut wishlist = Wishlist::new();
        assert!(wishlist.toggle(product("p1")));
        assert!(wishlist.contains(&ProductId::new("p1")));
        assert!(!wishlist.toggle(product("p1")));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut wishlist = Wishlist::new();
        wishlist.add(product("p1"));
        wishlist.add(product("p2"));

        wishlist.remove(&ProductId::new("p1"));
        assert!(!wishlist.contains(&ProductId::new("p1")));
        assert_eq!(wishlist.len(), 1);

        wishlist.clear();
        assert!(wishlist.is_empty());
    }
}
