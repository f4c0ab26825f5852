//! Line Items

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::ProductId;

/// A single cart entry.
///
/// The name, price and image are a snapshot of the product taken when it was first added; they
/// are never refreshed from the catalog. Field names on the wire match the records the
/// storefront has always persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog product this entry was taken from.
    #[serde(rename = "id")]
    pub product_id: ProductId,

    /// Product name at add time.
    pub name: String,

    /// Unit price at add time.
    #[serde(rename = "price", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,

    /// Product image at add time.
    pub image_url: String,

    /// Number of units.
    pub quantity: i64,

    /// Selected size.
    pub size: String,

    /// Selected colour.
    pub color: String,
}

impl LineItem {
    /// The identity of this entry within a cart.
    pub fn key(&self) -> LineItemKey {
        LineItemKey {
            product_id: self.product_id.clone(),
            size: self.size.clone(),
            color: self.color.clone(),
        }
    }

    /// Whether this entry has the given identity.
    pub fn is(&self, key: &LineItemKey) -> bool {
        self.product_id == key.product_id && self.size == key.size && self.color == key.color
    }

    /// Unit price multiplied by quantity.
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Identity of a line item: the same product in a different size or colour is a different entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineItemKey {
    /// Catalog product.
    pub product_id: ProductId,

    /// Selected size.
    pub size: String,

    /// Selected colour.
    pub color: String,
}

impl LineItemKey {
    /// Build a key from its three parts.
    pub fn new(
        product_id: impl Into<ProductId>,
        size: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            size: size.into(),
            color: color.into(),
        }
    }
}

/// Renders as `id-size-color`. This is a display label only; the parts may themselves contain
/// hyphens, so it is never parsed back into a key.
impl Display for LineItemKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}-{}-{}", self.product_id, self.size, self.color)
    }
}
