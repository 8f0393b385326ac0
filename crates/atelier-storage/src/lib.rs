//! Durable key-value storage for the Atelier storefront.
//!
//! The storefront keeps its cart and wishlist in small persisted slots so a
//! process restart does not lose in-session state. This crate provides the
//! slot abstraction: a [`KeyValue`] trait with automatic JSON serialization,
//! an in-memory implementation for tests, and a file-backed implementation
//! for real sessions.
//!
//! # Example
//!
//! ```rust,ignore
//! use atelier_storage::{FileStore, KeyValue};
//!
//! let store = FileStore::open(".atelier")?;
//! store.set("cart-storage", &cart)?;
//! let cart: Option<Cart> = store.get("cart-storage")?;
//! ```

mod error;
mod file;
mod kv;

pub use error::StorageError;
pub use file::FileStore;
pub use kv::{KeyValue, MemoryStore};
