//! Catalog provider boundary.

use async_trait::async_trait;

use crate::catalog::CatalogProduct;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Read-only access to the hosted product catalog.
///
/// Implementations wrap the hosted backend's table queries and run the
/// normalization step before returning, so callers only ever see
/// fully-populated products. The storefront core never mutates catalog data.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch a single product by id.
    async fn fetch_by_id(&self, id: &ProductId) -> Result<CatalogProduct, CommerceError>;

    /// Fetch products in a category, newest first. `None` fetches all.
    async fn fetch_by_category(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<CatalogProduct>, CommerceError>;

    /// Free-text search over name, description, and category.
    async fn search(&self, query: &str) -> Result<Vec<CatalogProduct>, CommerceError>;

    /// Fetch up to `limit` featured products.
    async fn fetch_featured(&self, limit: usize) -> Result<Vec<CatalogProduct>, CommerceError>;
}
