//! Commerce error types.
//!
//! Malformed ledger calls (blank ids, non-positive quantities) never surface
//! here; they are absorbed as no-ops or clamps at the call site. These
//! variants cover the failures that must reach a caller: provider-boundary
//! errors and closed-enumeration violations.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Debug, Error)]
pub enum CommerceError {
    /// Checkout attempted with no valid line items.
    #[error("cart has no valid items to submit")]
    InvalidCart,

    /// Order persistence failed; the ledger is left untouched for retry.
    #[error("order submission failed: {0}")]
    SubmissionFailed(String),

    /// Settings fetch failed; callers fall back to the last good snapshot.
    #[error("store settings unavailable: {0}")]
    SettingsUnavailable(String),

    /// Product lookup failed.
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// Order lookup failed.
    #[error("order not found: {0}")]
    OrderNotFound(String),

    /// A status string outside the closed enumeration.
    #[error("unknown order status: {0}")]
    UnknownStatus(String),

    /// A status change not in the allowed transition set.
    #[error("invalid status transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// Durable-slot failure. The in-memory ledger stays authoritative.
    #[error("storage error: {0}")]
    Storage(#[from] atelier_storage::StorageError),

    /// A domain value could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
