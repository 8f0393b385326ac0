//! Order snapshots and the status state machine.

use serde::{Deserialize, Serialize};

use crate::cart::{CartLineItem, PricingResult};
use crate::checkout::DeliveryAddress;
use crate::error::CommerceError;
use crate::ids::{OrderId, UserId};

/// Order status. Closed enumeration; anything else is rejected at parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order being prepared.
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered. Terminal.
    Delivered,
    /// Order cancelled. Terminal.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Parse a status string from admin input or a stored row.
    pub fn parse(s: &str) -> Result<Self, CommerceError> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(CommerceError::UnknownStatus(other.to_string())),
        }
    }

    /// Check if no further transitions are allowed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check a single fulfillment step or a cancellation.
    ///
    /// The fulfillment chain is pending -> processing -> shipped ->
    /// delivered; cancellation is allowed from any non-terminal state.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        match (self, next) {
            (Pending, Processing) | (Processing, Shipped) | (Shipped, Delivered) => true,
            (_, Cancelled) => !self.is_terminal(),
            _ => false,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable record of a submitted order.
///
/// Created once at checkout with the pricing quoted to the customer; only
/// `status` changes afterwards, and only through the transition set above.
/// Orders are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    /// Provider-assigned identifier.
    pub id: OrderId,
    pub user_id: UserId,
    /// Line items as of submission.
    pub line_items: Vec<CartLineItem>,
    /// Pricing as quoted at submission, already boundary-rounded.
    pub pricing: PricingResult,
    pub delivery_address: DeliveryAddress,
    pub status: OrderStatus,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl OrderSnapshot {
    /// Shortened id for confirmation messages and order lists.
    pub fn short_id(&self) -> &str {
        let id = self.id.as_str();
        id.get(..8).unwrap_or(id)
    }

    /// Sum of quantities across the order's lines.
    pub fn item_count(&self) -> i64 {
        self.line_items.iter().map(|i| i.quantity).sum()
    }

    /// Apply a status change, enforcing the transition set.
    pub fn apply_status(&mut self, next: OrderStatus) -> Result<(), CommerceError> {
        if !self.status.can_transition_to(next) {
            return Err(CommerceError::InvalidTransition {
                from: self.status.as_str().to_string(),
                to: next.as_str().to_string(),
            });
        }
        self.status = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn snapshot(status: OrderStatus) -> OrderSnapshot {
        let zero = Money::zero(Currency::USD);
        OrderSnapshot {
            id: OrderId::new("aabbccdd-1234"),
            user_id: UserId::new("u1"),
            line_items: vec![],
            pricing: PricingResult {
                subtotal: zero,
                shipping: zero,
                tax: zero,
                total: zero,
            },
            delivery_address: DeliveryAddress::default(),
            status,
            created_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_fulfillment_chain() {
        use OrderStatus::*;
        assert!(Pending.can_transition_to(Processing));
        assert!(Processing.can_transition_to(Shipped));
        assert!(Shipped.can_transition_to(Delivered));
        // no skipping and no going back
        assert!(!Pending.can_transition_to(Shipped));
        assert!(!Shipped.can_transition_to(Processing));
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn test_cancel_from_non_terminal_only() {
        use OrderStatus::*;
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Processing.can_transition_to(Cancelled));
        assert!(Shipped.can_transition_to(Cancelled));
        assert!(!Delivered.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Cancelled));
    }

    #[test]
    fn test_terminal_states_admit_nothing() {
        use OrderStatus::*;
        for next in [Pending, Processing, Shipped, Delivered, Cancelled] {
            assert!(!Delivered.can_transition_to(next));
            assert!(!Cancelled.can_transition_to(next));
        }
    }

    #[test]
    fn test_parse_is_closed() {
        assert_eq!(OrderStatus::parse("shipped").unwrap(), OrderStatus::Shipped);
        assert_eq!(OrderStatus::parse("Pending").unwrap(), OrderStatus::Pending);
        assert!(matches!(
            OrderStatus::parse("refunded"),
            Err(CommerceError::UnknownStatus(_))
        ));
    }

    #[test]
    fn test_apply_status_rejects_invalid() {
        let mut order = snapshot(OrderStatus::Pending);
        order.apply_status(OrderStatus::Processing).unwrap();
        assert_eq!(order.status, OrderStatus::Processing);

        let err = order.apply_status(OrderStatus::Delivered).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidTransition { .. }));
        assert_eq!(order.status, OrderStatus::Processing);
    }

    #[test]
    fn test_short_id() {
        let order = snapshot(OrderStatus::Pending);
        assert_eq!(order.short_id(), "aabbccdd");

        let mut tiny = snapshot(OrderStatus::Pending);
        tiny.id = OrderId::new("o1");
        assert_eq!(tiny.short_id(), "o1");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Shipped).unwrap();
        assert_eq!(json, "\"shipped\"");
    }
}
