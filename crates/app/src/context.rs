//! App Context

use std::path::PathBuf;

use tanabana::{
    cart::CartStore,
    catalog::InMemoryCatalog,
    fixtures::{FixtureError, load_catalog, load_orders},
    orders::InMemoryOrders,
    storage::FileSlot,
};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

/// Errors raised while wiring up a session.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The catalog fixture couldn't be loaded.
    #[error("failed to load catalog from {}: {source}", .path.display())]
    Catalog {
        /// Fixture path
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: FixtureError,
    },

    /// The order history fixture couldn't be loaded.
    #[error("failed to load orders from {}: {source}", .path.display())]
    Orders {
        /// Fixture path
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: FixtureError,
    },
}

/// Everything a command needs, built from configuration.
#[derive(Debug, Clone)]
pub struct AppContext {
    config: Config,
}

impl AppContext {
    /// Build a context from configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Open this session's cart on the file-backed slot.
    pub fn open_cart(&self) -> CartStore<FileSlot> {
        debug!(dir = %self.config.data_dir.display(), "opening cart slot");

        CartStore::open_with_key(
            FileSlot::new(&self.config.data_dir),
            self.config.cart_key.clone(),
        )
    }

    /// Load the product catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog fixture can't be read or parsed.
    pub fn catalog(&self) -> Result<InMemoryCatalog, AppInitError> {
        load_catalog(&self.config.catalog).map_err(|source| AppInitError::Catalog {
            path: self.config.catalog.clone(),
            source,
        })
    }

    /// Load order history.
    ///
    /// # Errors
    ///
    /// Returns an error if the orders fixture can't be read or parsed.
    pub fn orders(&self) -> Result<InMemoryOrders, AppInitError> {
        load_orders(&self.config.orders).map_err(|source| AppInitError::Orders {
            path: self.config.orders.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use testresult::TestResult;

    use tanabana::{
        cart::LineItemKey,
        catalog::{CatalogService, ProductId},
    };

    use super::*;

    fn config(dir: &Path) -> Config {
        Config {
            data_dir: dir.join("data"),
            cart_key: "test-cart".to_string(),
            catalog: dir.join("catalog.yaml"),
            orders: dir.join("orders.yaml"),
            log_level: "warn".to_string(),
        }
    }

    #[test]
    fn cart_persists_between_contexts() -> TestResult {
        let dir = tempfile::tempdir()?;
        fs::write(
            dir.path().join("catalog.yaml"),
            "products:\n  - id: p1\n    name: Tee\n    price: \"30\"\n    category: tops\n    sizes: [M]\n    colors: [White]\n",
        )?;

        let context = AppContext::new(config(dir.path()));
        let product = context.catalog()?.get_product(&ProductId::from("p1"))?;

        let mut cart = context.open_cart();
        cart.add(product.line_item(None, None, 2)?);

        let reopened = AppContext::new(config(dir.path())).open_cart();

        assert_eq!(reopened.key(), "test-cart");
        assert_eq!(
            reopened
                .state()
                .get(&LineItemKey::new("p1", "M", "White"))
                .map(|item| item.quantity),
            Some(2)
        );
        assert!(dir.path().join("data").join("test-cart.json").exists());

        Ok(())
    }

    #[test]
    fn missing_fixture_names_the_path() -> TestResult {
        let dir = tempfile::tempdir()?;
        let context = AppContext::new(config(dir.path()));

        let error = context.orders().err().ok_or("expected an error")?;

        let message = error.to_string();

        assert!(message.contains("orders.yaml"), "path missing from {message:?}");
        assert!(
            message.contains("Failed to read fixture file"),
            "cause missing from {message:?}"
        );

        Ok(())
    }
}
