//! Checkout: delivery address, order snapshots, and submission.

mod address;
mod order;
mod submit;

pub use address::DeliveryAddress;
pub use order::{OrderSnapshot, OrderStatus};
pub use submit::submit_order;
