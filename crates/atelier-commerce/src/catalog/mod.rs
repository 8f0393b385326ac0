//! Catalog types and the read-only provider boundary.

mod product;
mod provider;

pub use product::{CatalogProduct, RawProductRecord};
pub use provider::CatalogProvider;
