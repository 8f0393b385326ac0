//! Pricing: subtotal + settings snapshot -> shipping, tax, and total.
//!
//! [`quote`] is a pure function; it performs no I/O and reads nothing but its
//! arguments. Amounts stay unrounded here; rounding belongs to the display
//! and persistence boundaries ([`PricingResult::rounded`]).

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::settings::StoreSettings;

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Sum of line subtotals.
    pub subtotal: Money,
    /// Flat shipping fee, or zero when the free-shipping threshold is met.
    pub shipping: Money,
    /// Tax on the pre-shipping subtotal.
    pub tax: Money,
    /// subtotal + shipping + tax.
    pub total: Money,
}

impl PricingResult {
    /// The boundary view: every component rounded to cents, with the total
    /// recomputed from the rounded components so
    /// `total == subtotal + shipping + tax` holds exactly post-rounding.
    pub fn rounded(&self) -> PricingResult {
        let subtotal = self.subtotal.rounded();
        let shipping = self.shipping.rounded();
        let tax = self.tax.rounded();
        let total = subtotal + shipping + tax;
        PricingResult {
            subtotal,
            shipping,
            tax,
            total,
        }
    }

    /// Whether the threshold rule waived shipping.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

/// Price a subtotal under a settings snapshot.
///
/// Shipping is waived when free shipping is enabled and the subtotal meets
/// the threshold; tax applies to the pre-shipping subtotal only. Assumes a
/// non-negative subtotal (the ledger cannot produce another).
pub fn quote(subtotal: Money, settings: &StoreSettings) -> PricingResult {
    let shipping = if settings.free_shipping_enabled
        && subtotal.amount >= settings.free_shipping_threshold
    {
        Money::zero(subtotal.currency)
    } else {
        Money::new(settings.shipping_cost, subtotal.currency)
    };

    let tax = subtotal.percentage(settings.tax_rate_percent);
    let total = subtotal + shipping + tax;

    PricingResult {
        subtotal,
        shipping,
        tax,
        total,
    }
}
