//! Order Models

use std::{
    convert::Infallible,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{profiles::UserUuid, uuids::TypedUuid};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Fulfilment status of an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Placed, not yet picked
    Pending,
    /// Being prepared
    Processing,
    /// Handed to the carrier
    Shipped,
    /// Received by the customer
    Delivered,
    /// A status this storefront doesn't know about, kept verbatim
    Other(String),
}

impl OrderStatus {
    /// Status label as stored.
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Other(status) => status,
        }
    }

    /// Whether the order has reached the customer.
    pub fn is_complete(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

impl FromStr for OrderStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let status = match s.trim().to_ascii_lowercase().as_str() {
            "pending" => OrderStatus::Pending,
            "processing" => OrderStatus::Processing,
            "shipped" => OrderStatus::Shipped,
            "delivered" => OrderStatus::Delivered,
            _ => OrderStatus::Other(s.to_string()),
        };

        Ok(status)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;

        let Ok(status) = raw.parse::<OrderStatus>();

        Ok(status)
    }
}

/// Order Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier
    pub id: OrderUuid,

    /// Customer who placed the order
    pub user_id: UserUuid,

    /// Amount charged
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,

    /// Fulfilment status
    pub status: OrderStatus,

    /// When the order was placed
    pub created_at: Timestamp,

    /// When the order last changed
    pub updated_at: Timestamp,
}

impl Order {
    /// Only delivered orders can be placed again.
    pub fn can_reorder(&self) -> bool {
        self.status.is_complete()
    }
}
