//! Storefront domain types and logic for Atelier.
//!
//! This crate is the core behind the shop's cart, checkout, and order
//! history pages:
//!
//! - **Catalog**: normalized product values and the read-only provider
//!   boundary
//! - **Cart**: the session ledger with merge-by-identity line items and
//!   pricing (free-shipping threshold, tax, totals)
//! - **Checkout**: delivery address, order snapshots, status transitions,
//!   and submission
//! - **Settings**: the admin-managed shipping/tax snapshot with cached reads
//! - **Wishlist**: the saved-for-later set
//!
//! State that must survive a reload (cart, wishlist) goes through the
//! write-through wrappers in [`session`], backed by `atelier-storage`.
//!
//! # Example
//!
//! ```rust,ignore
//! use atelier_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add_item(&shirt, 2, "M", "White");
//!
//! let pricing = cart.pricing(&settings.current());
//! println!("Total: {}", pricing.rounded().total);
//!
//! let order = submit_order(&repo, &user_id, &cart, &pricing, &address).await?;
//! cart.clear();
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod money;
pub mod orders;
pub mod session;
pub mod settings;
pub mod wishlist;

pub use error::CommerceError;
pub use ids::{OrderId, ProductId, UserId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{OrderId, ProductId, UserId};
    pub use crate::money::{Currency, Money};

    pub use crate::catalog::{CatalogProduct, CatalogProvider, RawProductRecord};

    pub use crate::cart::{Cart, CartLineItem, CartProductRef, PricingResult};

    pub use crate::checkout::{submit_order, DeliveryAddress, OrderSnapshot, OrderStatus};

    pub use crate::orders::{change_order_status, OrderRepository, OrderScope};

    pub use crate::session::{PersistentCart, PersistentWishlist};

    pub use crate::settings::{CachedSettings, SettingsProvider, StoreSettings};

    pub use crate::wishlist::Wishlist;
}
