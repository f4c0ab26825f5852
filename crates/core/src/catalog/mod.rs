//! Catalog
//!
//! Products as the hosted backend stores them, the listing filters the storefront offers, and the
//! step that turns a product plus the shopper's selections into a cart line item.

pub mod errors;
pub mod models;
pub mod query;
pub mod service;

pub use errors::CatalogError;
pub use models::{Category, Product, ProductId};
pub use query::{PriceRange, ProductQuery, SortOrder};
pub use service::{CatalogService, InMemoryCatalog, MockCatalogService};
