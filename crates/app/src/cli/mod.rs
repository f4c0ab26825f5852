use clap::{Parser, Subcommand};
use tanabana_app::{config::Config, context::AppContext};

mod cart;
mod orders;
mod products;

#[derive(Debug, Parser)]
#[command(name = "tanabana", about = "Tanabana storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Inspect and edit the shopping cart
    Cart(cart::CartCommand),
    /// Browse the catalog
    Products(products::ProductsCommand),
    /// Show order history
    Orders(orders::OrdersCommand),
}

impl Cli {
    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn run(self) -> Result<(), String> {
        let context = AppContext::new(self.config);

        match self.command {
            Commands::Cart(command) => cart::run(&context, command),
            Commands::Products(command) => products::run(&context, command),
            Commands::Orders(command) => orders::run(&context, command),
        }
    }
}
