//! Catalog errors.

use thiserror::Error;

use crate::catalog::models::ProductId;

/// Errors raised by catalog lookups and line item construction.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product has this id.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// Two products share an id.
    #[error("duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// The product isn't offered in the requested size.
    #[error("size {size:?} is not available for product {product}")]
    UnavailableSize {
        /// Product that was requested
        product: ProductId,
        /// Size that was requested
        size: String,
    },

    /// The product isn't offered in the requested colour.
    #[error("color {color:?} is not available for product {product}")]
    UnavailableColor {
        /// Product that was requested
        product: ProductId,
        /// Colour that was requested
        color: String,
    },

    /// The product lists no sizes or no colours, so nothing can be selected.
    #[error("product {0} has no selectable variants")]
    NoVariants(ProductId),

    /// Quantities added to the cart start at one.
    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(i64),

    /// A price range filter couldn't be parsed.
    #[error("invalid price range: {0:?}")]
    InvalidPriceRange(String),

    /// A sort order couldn't be parsed.
    #[error("unknown sort order: {0:?}")]
    UnknownSortOrder(String),

    /// A category couldn't be parsed.
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),
}
