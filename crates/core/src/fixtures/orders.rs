//! Order Fixtures

use std::path::Path;

use jiff::Timestamp;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, parse_price, read},
    orders::{InMemoryOrders, Order, OrderStatus, OrderUuid},
    profiles::UserUuid,
};

/// Wrapper for orders in YAML
#[derive(Debug, Deserialize)]
pub struct OrdersFixture {
    /// Orders in any order
    pub orders: Vec<OrderFixture>,
}

/// Order Fixture
#[derive(Debug, Deserialize)]
pub struct OrderFixture {
    /// Order identifier
    pub id: OrderUuid,

    /// Customer
    pub user_id: UserUuid,

    /// Amount charged (e.g., "129.50")
    pub total_amount: String,

    /// Fulfilment status
    pub status: OrderStatus,

    /// When the order was placed (RFC 3339)
    pub created_at: String,

    /// When the order last changed; defaults to `created_at`
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn timestamp(raw: String) -> Result<Timestamp, FixtureError> {
    raw.parse::<Timestamp>()
        .map_err(|_err| FixtureError::InvalidTimestamp(raw))
}

impl TryFrom<OrderFixture> for Order {
    type Error = FixtureError;

    fn try_from(fixture: OrderFixture) -> Result<Self, Self::Error> {
        let created_at = timestamp(fixture.created_at)?;
        let updated_at = fixture
            .updated_at
            .map(timestamp)
            .transpose()?
            .unwrap_or(created_at);

        Ok(Order {
            id: fixture.id,
            user_id: fixture.user_id,
            total_amount: parse_price(&fixture.total_amount)?,
            status: fixture.status,
            created_at,
            updated_at,
        })
    }
}

/// Parse order history from YAML.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the YAML is malformed, an order is invalid, or two orders share
/// an id.
pub fn parse_orders(yaml: &str) -> Result<InMemoryOrders, FixtureError> {
    let fixture: OrdersFixture = serde_norway::from_str(yaml)?;

    let orders = fixture
        .orders
        .into_iter()
        .map(Order::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(InMemoryOrders::new(orders)?)
}

/// Load order history from a YAML file.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the file can't be read or parsed.
pub fn load_orders(path: impl AsRef<Path>) -> Result<InMemoryOrders, FixtureError> {
    parse_orders(&read(path.as_ref())?)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::orders::OrdersService;

    use super::*;

    const USER: &str = "0192d1a4-5b7e-7c3a-9f10-2b3c4d5e6f71";

    #[test]
    fn parses_orders() -> TestResult {
        let yaml = format!(
            r#"
orders:
  - id: 0192d1a4-5b7e-7c3a-9f10-000000000001
    user_id: {USER}
    total_amount: "129.50"
    status: Delivered
    created_at: "2024-01-10T09:00:00Z"
  - id: 0192d1a4-5b7e-7c3a-9f10-000000000002
    user_id: {USER}
    total_amount: "40.00"
    status: on-hold
    created_at: "2024-02-10T09:00:00Z"
    updated_at: "2024-02-11T09:00:00Z"
"#
        );

        let orders = parse_orders(&yaml)?;
        let history = orders.orders_for_user(USER.parse()?)?;

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.first().map(|o| o.status.clone()),
            Some(OrderStatus::Other("on-hold".to_string()))
        );
        assert_eq!(
            history.last().map(|o| o.status.clone()),
            Some(OrderStatus::Delivered)
        );

        Ok(())
    }

    #[test]
    fn bad_timestamp_is_rejected() {
        let yaml = format!(
            "orders:\n  - id: 0192d1a4-5b7e-7c3a-9f10-000000000001\n    user_id: {USER}\n    total_amount: \"1\"\n    status: pending\n    created_at: yesterday\n"
        );

        assert!(matches!(
            parse_orders(&yaml),
            Err(FixtureError::InvalidTimestamp(_))
        ));
    }
}
