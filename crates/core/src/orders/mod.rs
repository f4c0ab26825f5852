//! Order History

pub mod errors;
pub mod models;
pub mod service;
pub mod stats;

pub use errors::OrdersError;
pub use models::{Order, OrderStatus, OrderUuid};
pub use service::{InMemoryOrders, MockOrdersService, OrdersService};
pub use stats::OrderStats;
