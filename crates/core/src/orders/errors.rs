//! Orders service errors.

use thiserror::Error;

use crate::orders::models::OrderUuid;

/// Errors raised by order history lookups.
#[derive(Debug, Error)]
pub enum OrdersError {
    /// No order has this id.
    #[error("order not found: {0}")]
    NotFound(OrderUuid),

    /// Two orders share an id.
    #[error("duplicate order id: {0}")]
    DuplicateOrder(OrderUuid),
}
