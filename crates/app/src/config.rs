//! CLI configuration

use std::path::PathBuf;

use clap::Args;
use tracing_subscriber::EnvFilter;

/// Settings shared by every command. Each can also come from the environment or a `.env` file.
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Directory holding the durable cart slot
    #[arg(long, env = "TANABANA_DATA_DIR", default_value = ".tanabana", global = true)]
    pub data_dir: PathBuf,

    /// Slot key the cart is stored under
    #[arg(
        long,
        env = "TANABANA_CART_KEY",
        default_value = tanabana::cart::DEFAULT_CART_KEY,
        global = true
    )]
    pub cart_key: String,

    /// Catalog fixture (YAML)
    #[arg(
        long,
        env = "TANABANA_CATALOG",
        default_value = "crates/core/fixtures/catalog.yaml",
        global = true
    )]
    pub catalog: PathBuf,

    /// Order history fixture (YAML)
    #[arg(
        long,
        env = "TANABANA_ORDERS",
        default_value = "crates/core/fixtures/orders.yaml",
        global = true
    )]
    pub orders: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,
}

impl Config {
    /// Load `.env` if present. Call before parsing arguments so its values act as defaults.
    pub fn load_env() {
        _ = dotenvy::dotenv();
    }

    /// Install the global tracing subscriber. Logs go to stderr so command output stays clean.
    pub fn init_logging(&self) {
        tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr)
            .init();
    }

    /// Filter built from `--log-level`, which already falls back to `RUST_LOG`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.log_level)
    }
}
