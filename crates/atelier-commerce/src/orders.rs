//! Order persistence boundary.

use async_trait::async_trait;

use crate::cart::{CartLineItem, PricingResult};
use crate::checkout::{DeliveryAddress, OrderSnapshot, OrderStatus};
use crate::error::CommerceError;
use crate::ids::{OrderId, UserId};

/// Which orders a listing should return.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderScope {
    /// Orders belonging to one customer.
    User(UserId),
    /// Every order; the admin console view.
    All,
}

/// Append-only order history in the hosted backend.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order and return it with a provider-assigned id.
    async fn create_order(
        &self,
        user_id: &UserId,
        line_items: &[CartLineItem],
        pricing: &PricingResult,
        address: &DeliveryAddress,
    ) -> Result<OrderSnapshot, CommerceError>;

    /// Load a single order.
    async fn fetch_order(&self, id: &OrderId) -> Result<OrderSnapshot, CommerceError>;

    /// List orders in scope, newest first.
    async fn list_orders(&self, scope: OrderScope) -> Result<Vec<OrderSnapshot>, CommerceError>;

    /// Persist a status already validated against the transition set.
    ///
    /// Callers go through [`change_order_status`], which performs the
    /// validation; implementations just write.
    async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<OrderSnapshot, CommerceError>;
}

/// Apply an admin-requested status change.
///
/// The requested status is parsed against the closed enumeration and the
/// transition is checked against the order's current state before anything
/// is written; an invalid request never reaches the provider.
pub async fn change_order_status<R: OrderRepository + ?Sized>(
    repo: &R,
    id: &OrderId,
    requested: &str,
) -> Result<OrderSnapshot, CommerceError> {
    let next = OrderStatus::parse(requested)?;
    let current = repo.fetch_order(id).await?;

    if !current.status.can_transition_to(next) {
        return Err(CommerceError::InvalidTransition {
            from: current.status.as_str().to_string(),
            to: next.as_str().to_string(),
        });
    }

    tracing::debug!(order = %id, from = %current.status, to = %next, "updating order status");
    repo.update_status(id, next).await
}
