//! Tanabana
//!
//! Storefront domain for the Tanabana fashion shop: the shopping cart state machine and its
//! durable slot, plus the catalog, profile and order records exchanged with the hosted backend.

pub mod cart;
pub mod catalog;
pub mod fixtures;
pub mod orders;
pub mod profiles;
pub mod storage;
pub mod uuids;
