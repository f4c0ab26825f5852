//! Product Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{cart::LineItem, catalog::errors::CatalogError};

/// Opaque catalog identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// The identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Dresses
    Dresses,
    /// Tops
    Tops,
    /// Bottoms
    Bottoms,
    /// Accessories
    Accessories,
    /// Bags
    Bags,
    /// Outerwear
    Outerwear,
    /// Activewear
    Activewear,
}

impl Category {
    /// Every category, in the order the storefront lists them.
    pub const ALL: [Category; 7] = [
        Category::Dresses,
        Category::Tops,
        Category::Bottoms,
        Category::Accessories,
        Category::Bags,
        Category::Outerwear,
        Category::Activewear,
    ];

    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Dresses => "dresses",
            Category::Tops => "tops",
            Category::Bottoms => "bottoms",
            Category::Accessories => "accessories",
            Category::Bags => "bags",
            Category::Outerwear => "outerwear",
            Category::Activewear => "activewear",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();

        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// Product Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Long description
    #[serde(default)]
    pub description: String,

    /// Current unit price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Category
    pub category: Category,

    /// Primary image
    #[serde(default)]
    pub image_url: String,

    /// Sizes on offer, in display order
    #[serde(default)]
    pub sizes: Vec<String>,

    /// Colours on offer, in display order
    #[serde(default)]
    pub colors: Vec<String>,

    /// When the product was listed
    pub created_at: Timestamp,

    /// When the product was last changed
    pub updated_at: Timestamp,
}

impl Product {
    /// Snapshot this product into a cart line item.
    ///
    /// A missing selection falls back to the first size or colour on offer.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the quantity is below one, if the product offers no sizes or
    /// colours, or if a selection isn't one the product offers.
    pub fn line_item(
        &self,
        size: Option<&str>,
        color: Option<&str>,
        quantity: i64,
    ) -> Result<LineItem, CatalogError> {
        if quantity < 1 {
            return Err(CatalogError::InvalidQuantity(quantity));
        }

        let size = select(&self.sizes, size)
            .map_err(|requested| self.unavailable_size(requested))?
            .ok_or_else(|| CatalogError::NoVariants(self.id.clone()))?;

        let color = select(&self.colors, color)
            .map_err(|requested| self.unavailable_color(requested))?
            .ok_or_else(|| CatalogError::NoVariants(self.id.clone()))?;

        Ok(LineItem {
            product_id: self.id.clone(),
            name: self.name.clone(),
            unit_price: self.price,
            image_url: self.image_url.clone(),
            quantity,
            size: size.to_string(),
            color: color.to_string(),
        })
    }

    /// Whether the product comes in this size.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|offered| offered == size)
    }

    /// Whether the product comes in this colour.
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|offered| offered == color)
    }

    fn unavailable_size(&self, size: &str) -> CatalogError {
        CatalogError::UnavailableSize {
            product: self.id.clone(),
            size: size.to_string(),
        }
    }

    fn unavailable_color(&self, color: &str) -> CatalogError {
        CatalogError::UnavailableColor {
            product: self.id.clone(),
            color: color.to_string(),
        }
    }
}

/// Pick `requested` from `offered`, or the first offered option when nothing was requested.
///
/// `Err` carries a request that isn't on offer; `Ok(None)` means there was nothing to pick.
fn select<'a>(
    offered: &'a [String],
    requested: Option<&'a str>,
) -> Result<Option<&'a str>, &'a str> {
    match requested {
        Some(requested) => offered
            .iter()
            .find(|option| *option == requested)
            .map(|option| Some(option.as_str()))
            .ok_or(requested),
        None => Ok(offered.first().map(String::as_str)),
    }
}
