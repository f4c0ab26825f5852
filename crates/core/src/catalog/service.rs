//! Catalog service.

use mockall::automock;
use rustc_hash::FxHashMap;

use crate::catalog::{
    errors::CatalogError,
    models::{Product, ProductId},
    query::ProductQuery,
};

/// Read access to the product catalog.
#[automock]
pub trait CatalogService {
    /// Retrieve a single product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no product has this id.
    fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError>;

    /// List the products matching `query`, in the query's order.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the catalog can't be read.
    fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, CatalogError>;
}

/// Catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    index: FxHashMap<ProductId, usize>,
}

impl InMemoryCatalog {
    /// Build a catalog from a product list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateProduct`] if two products share an id.
    pub fn new(products: impl Into<Vec<Product>>) -> Result<Self, CatalogError> {
        let products = products.into();
        let mut index = FxHashMap::default();

        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
        }

        Ok(Self { products, index })
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogService for InMemoryCatalog {
    fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        self.index
            .get(id)
            .and_then(|position| self.products.get(*position))
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, CatalogError> {
        Ok(query.apply(&self.products).into_iter().cloned().collect())
    }
}
