//! Catalog Fixtures

use std::path::Path;

use jiff::Timestamp;
use serde::Deserialize;

use crate::{
    catalog::{InMemoryCatalog, Product, ProductId},
    fixtures::{FixtureError, parse_price, read},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Products in listing order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Catalog identifier
    pub id: String,

    /// Product name
    pub name: String,

    /// Long description
    #[serde(default)]
    pub description: String,

    /// Product price (e.g., "89.00")
    pub price: String,

    /// Category name (e.g., "dresses")
    pub category: String,

    /// Primary image
    #[serde(default)]
    pub image_url: String,

    /// Sizes on offer
    #[serde(default)]
    pub sizes: Vec<String>,

    /// Colours on offer
    #[serde(default)]
    pub colors: Vec<String>,

    /// Listing time (RFC 3339); defaults to the epoch
    #[serde(default)]
    pub created_at: Option<String>,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let created_at = match fixture.created_at {
            Some(raw) => raw
                .parse::<Timestamp>()
                .map_err(|_err| FixtureError::InvalidTimestamp(raw))?,
            None => Timestamp::UNIX_EPOCH,
        };

        Ok(Product {
            id: ProductId::from(fixture.id),
            name: fixture.name,
            description: fixture.description,
            price: parse_price(&fixture.price)?,
            category: fixture.category.parse()?,
            image_url: fixture.image_url,
            sizes: fixture.sizes,
            colors: fixture.colors,
            created_at,
            updated_at: created_at,
        })
    }
}

/// Parse a catalog from YAML.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the YAML is malformed, a product is invalid, or two products
/// share an id.
pub fn parse_catalog(yaml: &str) -> Result<InMemoryCatalog, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

    let products = fixture
        .products
        .into_iter()
        .map(Product::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(InMemoryCatalog::new(products)?)
}

/// Load a catalog from a YAML file.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the file can't be read or parsed.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<InMemoryCatalog, FixtureError> {
    parse_catalog(&read(path.as_ref())?)
}
