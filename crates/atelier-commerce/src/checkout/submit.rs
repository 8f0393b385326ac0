//! Order snapshot builder: turn a ledger into a persisted order.

use crate::cart::{Cart, CartLineItem, PricingResult};
use crate::checkout::{DeliveryAddress, OrderSnapshot};
use crate::error::CommerceError;
use crate::ids::UserId;
use crate::orders::OrderRepository;

/// Submit the cart as an order.
///
/// Lines without a resolvable product id are silently excluded; a cart with
/// no valid lines fails with [`CommerceError::InvalidCart`] before any
/// provider call. The pricing passed in is the one quoted to the customer at
/// submit time and is persisted boundary-rounded, exactly as displayed.
///
/// This function never touches the ledger. On success the caller clears the
/// cart; on [`CommerceError::SubmissionFailed`] the cart is still intact and
/// the customer can retry without data loss.
pub async fn submit_order<R: OrderRepository + ?Sized>(
    repo: &R,
    user_id: &UserId,
    cart: &Cart,
    pricing: &PricingResult,
    address: &DeliveryAddress,
) -> Result<OrderSnapshot, CommerceError> {
    let valid_lines: Vec<CartLineItem> = cart
        .items
        .iter()
        .filter(|line| !line.product.id.is_blank())
        .cloned()
        .collect();

    if valid_lines.is_empty() {
        return Err(CommerceError::InvalidCart);
    }

    let dropped = cart.items.len() - valid_lines.len();
    if dropped > 0 {
        tracing::warn!(dropped, "excluding cart lines without a product id");
    }

    match repo
        .create_order(user_id, &valid_lines, &pricing.rounded(), address)
        .await
    {
        Ok(order) => {
            tracing::debug!(order = %order.id, total = %order.pricing.total, "order submitted");
            Ok(order)
        }
        Err(CommerceError::SubmissionFailed(message)) => {
            tracing::warn!(error = %message, "order submission failed");
            Err(CommerceError::SubmissionFailed(message))
        }
        Err(e) => {
            tracing::warn!(error = %e, "order submission failed");
            Err(CommerceError::SubmissionFailed(e.to_string()))
        }
    }
}
