//! Shopping Cart
//!
//! The cart is a reducer over [`CartState`] wrapped by a [`CartStore`] that mirrors the item list
//! into a durable [`Slot`](crate::storage::Slot) after every change.

pub mod items;
pub mod state;
pub mod store;
pub mod summary;

pub use items::{LineItem, LineItemKey};
pub use state::{CartAction, CartState};
pub use store::{CartStore, DEFAULT_CART_KEY};
pub use summary::CartSummary;
