//! Write-through persistence for the cart and wishlist slots.
//!
//! A reload must not lose the cart, so every mutating operation performs the
//! in-memory update and then an explicit save to durable storage. The
//! in-memory state is authoritative; a failed save is reported but never
//! rolls the mutation back, and the next successful save wins.

use atelier_storage::KeyValue;

use crate::cart::Cart;
use crate::catalog::CatalogProduct;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::wishlist::Wishlist;

/// Slot key for the serialized cart ledger.
pub const CART_STORAGE_KEY: &str = "cart-storage";
/// Slot key for the serialized wishlist.
pub const WISHLIST_STORAGE_KEY: &str = "wishlist-storage";

/// The cart ledger bound to a durable slot.
pub struct PersistentCart<S: KeyValue> {
    store: S,
    cart: Cart,
}

impl<S: KeyValue> PersistentCart<S> {
    /// Load the persisted cart, or start empty.
    ///
    /// An unreadable slot (corrupt JSON, backend error) starts a fresh cart
    /// rather than blocking startup; the next save overwrites the slot.
    pub fn load(store: S) -> Self {
        let cart = match store.get::<Cart>(CART_STORAGE_KEY) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "cart slot unreadable, starting empty");
                Cart::new()
            }
        };
        Self { store, cart }
    }

    /// The current ledger state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// See [`Cart::add_item`]; persists after the update.
    pub fn add_item(
        &mut self,
        product: &CatalogProduct,
        quantity: i64,
        size: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<(), CommerceError> {
        self.cart.add_item(product, quantity, size, color);
        self.save()
    }

    /// See [`Cart::remove_item`]; persists after the update.
    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<(), CommerceError> {
        self.cart.remove_item(product_id);
        self.save()
    }

    /// See [`Cart::update_item_quantity`]; persists after the update.
    pub fn update_item_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        self.cart.update_item_quantity(product_id, quantity);
        self.save()
    }

    /// Empty the ledger and persist the empty slot.
    ///
    /// Called after confirmed order submission and on explicit clear.
    pub fn clear(&mut self) -> Result<(), CommerceError> {
        self.cart.clear();
        self.save()
    }

    fn save(&self) -> Result<(), CommerceError> {
        self.store.set(CART_STORAGE_KEY, &self.cart).map_err(|e| {
            tracing::warn!(error = %e, "cart write-through failed");
            CommerceError::from(e)
        })
    }
}

/// The wishlist bound to a durable slot.
pub struct PersistentWishlist<S: KeyValue> {
    store: S,
    wishlist: Wishlist,
}

impl<S: KeyValue> PersistentWishlist<S> {
    /// Load the persisted wishlist, or start empty.
    pub fn load(store: S) -> Self {
        let wishlist = match store.get::<Wishlist>(WISHLIST_STORAGE_KEY) {
            Ok(Some(wishlist)) => wishlist,
            Ok(None) => Wishlist::new(),
            Err(e) => {
                tracing::warn!(error = %e, "wishlist slot unreadable, starting empty");
                Wishlist::new()
            }
        };
        Self { store, wishlist }
    }

    /// The current wishlist state.
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// See [`Wishlist::toggle`]; persists after the update.
    pub fn toggle(&mut self, product: CatalogProduct) -> Result<bool, CommerceError> {
        let saved = self.wishlist.toggle(product);
        self.save()?;
        Ok(saved)
    }

    /// See [`Wishlist::remove`]; persists after the update.
    pub fn remove(&mut self, product_id: &ProductId) -> Result<(), CommerceError> {
        self.wishlist.remove(product_id);
        self.save()
    }

    /// Empty the wishlist and persist the empty slot.
    pub fn clear(&mut self) -> Result<(), CommerceError> {
        self.wishlist.clear();
        self.save()
    }

    fn save(&self) -> Result<(), CommerceError> {
        self.store
            .set(WISHLIST_STORAGE_KEY, &self.wishlist)
            .map_err(|e| {
                tracing::warn!(error = %e, "wishlist write-through failed");
                CommerceError::from(e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};
    use atelier_storage::MemoryStore;
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
    fn test_cart_survives_reload() {
        let store = MemoryStore::new();

        let mut session = PersistentCart::load(&store);
        session.add_item(&product("p1"), 2, "M", "White").unwrap();
        session.add_item(&product("p2"), 1, "32", "Blue").unwrap();
        drop(session);

        let reloaded = PersistentCart::load(&store);
        assert_eq!(reloaded.cart().total_item_count(), 3);
        assert_eq!(reloaded.cart().unique_line_count(), 2);
    }

    #[test]
    fn test_every_mutation_is_written_through() {
        let store = MemoryStore::new();
        let mut session = PersistentCart::load(&store);

        session.add_item(&product("p1"), 1, "M", "White").unwrap();
        session
            .update_item_quantity(&ProductId::new("p1"), 5)
            .unwrap();
        let persisted: Cart = store.get(CART_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(persisted.total_item_count(), 5);

        session.remove_item(&ProductId::new("p1")).unwrap();
        let persisted: Cart = store.get(CART_STORAGE_KEY).unwrap().unwrap();
        assert!(persisted.is_empty());
    }

    #[test]
    fn test_clear_persists_empty_slot() {
        let store = MemoryStore::new();
        let mut session = PersistentCart::load(&store);
        session.add_item(&product("p1"), 1, "M", "White").unwrap();

        session.clear().unwrap();

        let reloaded = PersistentCart::load(&store);
        assert!(reloaded.cart().is_empty());
    }

    #[test]
    fn test_corrupt_slot_starts_empty() {
        let store = MemoryStore::new();
        store.set_raw(CART_STORAGE_KEY, b"not json").unwrap();

        let session = PersistentCart::load(&store);
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_wishlist_survives_reload() {
        let store = MemoryStore::new();

        let mut session = PersistentWishlist::load(&store);
        assert!(session.toggle(product("p1")).unwrap());
        drop(session);

        let mut reloaded = PersistentWishlist::load(&store);
        assert!(reloaded.wishlist().contains(&ProductId::new("p1")));
        assert!(!reloaded.toggle(product("p1")).unwrap());
        assert!(reloaded.wishlist().is_empty());
    }
}
