//! Product records and the normalization step at the provider boundary.
//!
//! Hosted-table rows arrive loosely typed: optional names, prices that may be
//! absent, and an image that may live under `image_url` or the legacy `image`
//! column. Normalization happens exactly once, here; everything downstream
//! of the catalog sees a fully-populated [`CatalogProduct`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// A product row as fetched from the hosted table, before normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawProductRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub currency: Option<String>,
    /// Current image column.
    pub image_url: Option<String>,
    /// Legacy image column, still present on older rows.
    pub image: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub colors: Option<Vec<String>>,
    pub sizes: Option<Vec<String>>,
    pub in_stock: Option<bool>,
    pub featured: Option<bool>,
}

impl RawProductRecord {
    /// Normalize into a fully-populated product.
    ///
    /// Returns `None` when the row has no usable id; such rows are dropped at
    /// the boundary rather than propagated as errors. Missing fields default
    /// to empty strings, zero price, and out-of-stock.
    pub fn normalize(self) -> Option<CatalogProduct> {
        let id = ProductId::new(self.id?);
        if id.is_blank() {
            return None;
        }

        let currency = self
            .currency
            .as_deref()
            .and_then(Currency::from_code)
            .unwrap_or_default();

        Some(CatalogProduct {
            id,
            name: self.name.unwrap_or_default(),
            price: Money::new(self.price.unwrap_or_default(), currency),
            image: self.image_url.or(self.image).unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            colors: self.colors.unwrap_or_default(),
            sizes: self.sizes.unwrap_or_default(),
            in_stock: self.in_stock.unwrap_or(false),
            featured: self.featured.unwrap_or(false),
        })
    }
}

/// A normalized catalog product. Read-only to the storefront core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: String,
    pub description: String,
    pub category: String,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub in_stock: bool,
    pub featured: bool,
}

impl CatalogProduct {
    /// Check whether this product matches a free-text query.
    ///
    /// Every whitespace-separated term must hit at least one of name,
    /// description, or category, case-insensitively.
    pub fn matches_query(&self, query: &str) -> bool {
        let terms: Vec<String> = query
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();
        if terms.is_empty() {
            return false;
        }

        let name = self.name.to_lowercase();
        let description = self.description.to_lowercase();
        let category = self.category.to_lowercase();

        terms.iter().all(|term| {
            name.contains(term.as_str())
                || description.contains(term.as_str())
                || category.contains(term.as_str())
        })
    }
}
