//! Orders service.

use mockall::automock;
use rustc_hash::FxHashSet;

use crate::{
    orders::{
        errors::OrdersError,
        models::{Order, OrderUuid},
    },
    profiles::UserUuid,
};

/// Read access to order history.
#[automock]
pub trait OrdersService {
    /// A user's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns an [`OrdersError`] if orders can't be read.
    fn orders_for_user(&self, user: UserUuid) -> Result<Vec<Order>, OrdersError>;

    /// Retrieve a single order belonging to `user`.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersError::NotFound`] if the order doesn't exist or belongs to someone else.
    fn get_order(&self, user: UserUuid, order: OrderUuid) -> Result<Order, OrdersError>;
}

/// Orders held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrders {
    orders: Vec<Order>,
}

impl InMemoryOrders {
    /// Build an order store.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersError::DuplicateOrder`] if two orders share an id.
    pub fn new(orders: impl Into<Vec<Order>>) -> Result<Self, OrdersError> {
        let orders = orders.into();
        let mut seen = FxHashSet::default();

        if let Some(duplicate) = orders.iter().find(|order| !seen.insert(order.id)) {
            return Err(OrdersError::DuplicateOrder(duplicate.id));
        }

        Ok(Self { orders })
    }
}

impl OrdersService for InMemoryOrders {
    fn orders_for_user(&self, user: UserUuid) -> Result<Vec<Order>, OrdersError> {
        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|order| order.user_id == user)
            .cloned()
            .collect();

        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(orders)
    }

    fn get_order(&self, user: UserUuid, order: OrderUuid) -> Result<Order, OrdersError> {
        self.orders
            .iter()
            .find(|candidate| candidate.id == order && candidate.user_id == user)
            .cloned()
            .ok_or(OrdersError::NotFound(order))
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::orders::{models::OrderStatus, stats::OrderStats};

    use super::*;

    fn order(user: UserUuid, placed: i64, status: OrderStatus) -> Order {
        let at = Timestamp::from_second(placed).unwrap_or(Timestamp::UNIX_EPOCH);

        Order {
            id: OrderUuid::now_v7(),
            user_id: user,
            total_amount: Decimal::from(100),
            status,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn orders_for_user_are_newest_first_and_scoped() -> TestResult {
        let ada = UserUuid::now_v7();
        let bob = UserUuid::now_v7();

        let oldest = order(ada, 1_000, OrderStatus::Delivered);
        let newest = order(ada, 3_000, OrderStatus::Pending);
        let middle = order(ada, 2_000, OrderStatus::Shipped);
        let other = order(bob, 4_000, OrderStatus::Pending);

        let orders = InMemoryOrders::new(vec![
            oldest.clone(),
            newest.clone(),
            other,
            middle.clone(),
        ])?;

        let history = orders.orders_for_user(ada)?;
        let ids: Vec<_> = history.iter().map(|o| o.id).collect();

        assert_eq!(ids, [newest.id, middle.id, oldest.id]);

        Ok(())
    }

    #[test]
    fn user_without_orders_gets_empty_history() -> TestResult {
        let orders = InMemoryOrders::default();

        assert!(orders.orders_for_user(UserUuid::now_v7())?.is_empty());

        Ok(())
    }

    #[test]
    fn get_order_hides_other_users_orders() -> TestResult {
        let ada = UserUuid::now_v7();
        let bob = UserUuid::now_v7();
        let placed = order(ada, 1_000, OrderStatus::Pending);

        let orders = InMemoryOrders::new(vec![placed.clone()])?;

        assert_eq!(orders.get_order(ada, placed.id)?, placed);
        assert!(matches!(
            orders.get_order(bob, placed.id),
            Err(OrdersError::NotFound(_))
        ));

        Ok(())
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let placed = order(UserUuid::now_v7(), 1_000, OrderStatus::Pending);

        let result = InMemoryOrders::new(vec![placed.clone(), placed]);

        assert!(matches!(result, Err(OrdersError::DuplicateOrder(_))));
    }

    #[test]
    fn history_stats_only_count_the_users_orders() -> TestResult {
        let ada = UserUuid::now_v7();
        let bob = UserUuid::now_v7();

        let orders = InMemoryOrders::new(vec![
            order(ada, 1_000, OrderStatus::Delivered),
            order(ada, 2_000, OrderStatus::Shipped),
            order(ada, 3_000, OrderStatus::Pending),
            order(bob, 4_000, OrderStatus::Delivered),
        ])?;

        let history = orders.orders_for_user(ada)?;
        let stats = OrderStats::new(&history);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.shipped, 1);
        assert_eq!(stats.delivered, 1);
        assert_eq!(stats.reorderable, 1);
        assert!(
            history.last().is_some_and(Order::can_reorder),
            "the oldest order was delivered"
        );

        Ok(())
    }
}
