//! Store settings: the admin-managed shipping and tax configuration.
//!
//! The storefront core only reads settings. Reads go through
//! [`CachedSettings`], which serves the last successfully fetched snapshot
//! (or the built-in defaults before the first fetch) when the provider is
//! unreachable, so a flaky backend never blanks the checkout summary.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// Shipping and tax configuration, fetched as a point-in-time snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    pub free_shipping_enabled: bool,
    /// Subtotal at or above which shipping is waived. Non-negative.
    pub free_shipping_threshold: Decimal,
    /// Flat shipping fee. Non-negative.
    pub shipping_cost: Decimal,
    /// Tax rate in percent, within [0, 100].
    pub tax_rate_percent: Decimal,
}

impl Default for StoreSettings {
    /// First-load fallback used until a fetch succeeds.
    fn default() -> Self {
        Self {
            free_shipping_enabled: true,
            free_shipping_threshold: Decimal::ONE_HUNDRED,
            shipping_cost: Decimal::TEN,
            tax_rate_percent: Decimal::from(8),
        }
    }
}

impl StoreSettings {
    /// Force the documented field ranges onto a fetched snapshot.
    ///
    /// Admin tooling validates on write, but the hosted table is shared and
    /// the core cannot assume every row honored it.
    pub fn clamped(mut self) -> Self {
        self.free_shipping_threshold = self.free_shipping_threshold.max(Decimal::ZERO);
        self.shipping_cost = self.shipping_cost.max(Decimal::ZERO);
        self.tax_rate_percent = self
            .tax_rate_percent
            .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
        self
    }
}

/// Read access to the current store settings.
///
/// The admin settings console is the sole writer; this core never mutates.
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    /// Fetch the current settings row.
    async fn fetch_current(&self) -> Result<StoreSettings, CommerceError>;
}

/// Cached settings handle with manual refresh.
///
/// `refresh` is called on page visits; a failed fetch keeps the previous
/// snapshot usable and reports [`CommerceError::SettingsUnavailable`] as a
/// soft signal.
pub struct CachedSettings<P: SettingsProvider> {
    provider: P,
    current: StoreSettings,
}

impl<P: SettingsProvider> CachedSettings<P> {
    /// Create a handle seeded with the built-in defaults.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            current: StoreSettings::default(),
        }
    }

    /// The snapshot pricing should use right now.
    pub fn current(&self) -> StoreSettings {
        self.current
    }

    /// Re-fetch from the provider.
    ///
    /// On success the new snapshot (range-clamped) replaces the cached one
    /// and is returned. On failure the cached snapshot is kept and the error
    /// is surfaced for an optional soft warning.
    pub async fn refresh(&mut self) -> Result<StoreSettings, CommerceError> {
        match self.provider.fetch_current().await {
            Ok(settings) => {
                self.current = settings.clamped();
                tracing::debug!(settings = ?self.current, "settings refreshed");
                Ok(self.current)
            }
            Err(e) => {
                tracing::warn!(error = %e, "settings fetch failed, keeping cached snapshot");
                Err(CommerceError::SettingsUnavailable(e.to_string()))
            }
        }
    }
}
