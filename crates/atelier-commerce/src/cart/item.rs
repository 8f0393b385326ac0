//! Cart line items.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogProduct;
use crate::ids::ProductId;
use crate::money::Money;

/// The slice of a product a line item keeps for rendering and submission.
///
/// Copied from the normalized catalog product at add time; never refreshed,
/// so a rendered cart cannot change under the customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartProductRef {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: String,
    pub description: String,
}

impl From<&CatalogProduct> for CartProductRef {
    fn from(product: &CatalogProduct) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            description: product.description.clone(),
        }
    }
}

/// One (product, size, color) selection in the ledger.
///
/// Identity key is `(product.id, size, color)`; the ledger holds at most one
/// line per key. `unit_price_at_add` is the price the customer saw when the
/// line was created and survives catalog price changes for the life of the
/// cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product: CartProductRef,
    pub quantity: i64,
    pub size: String,
    pub color: String,
    /// Defaults to zero when absent from a stored row, so an old slot
    /// missing the recorded price still sums instead of failing.
    #[serde(default)]
    pub unit_price_at_add: Money,
}

impl CartLineItem {
    /// Check this line against an identity key.
    pub fn matches(&self, product_id: &ProductId, size: &str, color: &str) -> bool {
        &self.product.id == product_id && self.size == size && self.color == color
    }

    /// Price contribution of this line, unrounded.
    pub fn line_subtotal(&self) -> Money {
        self.unit_price_at_add.multiply(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;
    use rust_decimal_macros::dec;

    fn line() -> CartLineItem {
        CartLineItem {
            product: CartProductRef {
                id: ProductId::new("p1"),
                name: "Classic Cotton T-Shirt".to_string(),
                price: Money::new(dec!(24.99), Currency::USD),
                image: String::new(),
                description: String::new(),
            },
            quantity: 2,
            size: "M".to_string(),
            color: "White".to_string(),
            unit_price_at_add: Money::new(dec!(24.99), Currency::USD),
        }
    }

    #[test]
    fn test_identity_key_match() {
        let item = line();
        assert!(item.matches(&ProductId::new("p1"), "M", "White"));
        assert!(!item.matches(&ProductId::new("p1"), "L", "White"));
        assert!(!item.matches(&ProductId::new("p1"), "M", "Black"));
        assert!(!item.matches(&ProductId::new("p2"), "M", "White"));
    }

    #[test]
    fn test_line_subtotal() {
        assert_eq!(line().line_subtotal().amount, dec!(49.98));
    }

    #[test]
    fn test_missing_recorded_price_sums_as_zero() {
        let json = r#"{
            "product": {
                "id": "p1",
                "name": "Classic Cotton T-Shirt",
                "price": { "amount": "24.99", "currency": "USD" },
                "image": "",
                "description": ""
            },
            "quantity": 2,
            "size": "M",
            "color": "White"
        }"#;
        let item: CartLineItem = serde_json::from_str(json).unwrap();
        assert!(item.line_subtotal().is_zero());
    }
}
