//! Order Statistics

use crate::orders::models::{Order, OrderStatus};

/// Counts over a user's order history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderStats {
    /// Every order, whatever its status
    pub total: usize,

    /// Orders awaiting fulfilment
    pub pending: usize,

    /// Orders being prepared
    pub processing: usize,

    /// Orders with the carrier
    pub shipped: usize,

    /// Orders received by the customer
    pub delivered: usize,

    /// Orders that can be placed again
    pub reorderable: usize,
}

impl OrderStats {
    /// Tally a list of orders.
    pub fn new(orders: &[Order]) -> Self {
        orders.iter().fold(Self::default(), |mut stats, order| {
            stats.total += 1;

            match order.status {
                OrderStatus::Pending => stats.pending += 1,
                OrderStatus::Processing => stats.processing += 1,
                OrderStatus::Shipped => stats.shipped += 1,
                OrderStatus::Delivered => stats.delivered += 1,
                OrderStatus::Other(_) => {}
            }

            if order.can_reorder() {
                stats.reorderable += 1;
            }

            stats
        })
    }
}

impl From<&[Order]> for OrderStats {
    fn from(orders: &[Order]) -> Self {
        Self::new(orders)
    }
}
