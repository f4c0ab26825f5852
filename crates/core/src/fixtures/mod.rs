//! Fixtures
//!
//! YAML snapshots of backend tables, used to run the storefront without the hosted backend.

use std::{fs, path::Path};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{catalog::CatalogError, orders::OrdersError};

pub mod catalog;
pub mod orders;

pub use catalog::{CatalogFixture, ProductFixture, load_catalog, parse_catalog};
pub use orders::{OrderFixture, OrdersFixture, load_orders, parse_orders};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid timestamp format
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Invalid category
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Invalid order set
    #[error(transparent)]
    Orders(#[from] OrdersError),
}

fn read(path: &Path) -> Result<String, FixtureError> {
    Ok(fs::read_to_string(path)?)
}

/// Parse a plain decimal amount such as `"89.00"`.
///
/// # Errors
///
/// Returns [`FixtureError::InvalidPrice`] if the value isn't a non-negative decimal.
pub fn parse_price(s: &str) -> Result<Decimal, FixtureError> {
    let amount = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    Ok(amount)
}
