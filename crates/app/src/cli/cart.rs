use clap::{Args, Subcommand};
use tanabana::{
    cart::LineItemKey,
    catalog::{CatalogService, ProductId},
};
use tanabana_app::{context::AppContext, output::render_cart};
use tracing::info;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show the cart and its order summary
    Show,
    /// Add a product to the cart
    Add(AddArgs),
    /// Remove a line from the cart
    Remove(LineArgs),
    /// Change the quantity of a line; zero or less removes it
    Update(UpdateArgs),
    /// Empty the cart
    Clear,
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Catalog product id
    product: String,

    /// Size; defaults to the first size on offer
    #[arg(long)]
    size: Option<String>,

    /// Colour; defaults to the first colour on offer
    #[arg(long)]
    color: Option<String>,

    /// Number of units
    #[arg(short, long, default_value_t = 1)]
    quantity: i64,
}

#[derive(Debug, Args)]
struct LineArgs {
    /// Catalog product id
    product: String,

    /// Size of the line
    #[arg(long)]
    size: String,

    /// Colour of the line
    #[arg(long)]
    color: String,
}

impl LineArgs {
    fn key(self) -> LineItemKey {
        LineItemKey::new(self.product, self.size, self.color)
    }
}

#[derive(Debug, Args)]
struct UpdateArgs {
    #[command(flatten)]
    line: LineArgs,

    /// New number of units
    #[arg(short, long, allow_negative_numbers = true)]
    quantity: i64,
}

pub(crate) fn run(context: &AppContext, command: CartCommand) -> Result<(), String> {
    let mut cart = context.open_cart();

    let state = match command.command {
        CartSubcommand::Show => cart.state(),
        CartSubcommand::Add(args) => {
            let catalog = context.catalog().map_err(|error| error.to_string())?;

            let product = catalog
                .get_product(&ProductId::from(args.product))
                .map_err(|error| format!("failed to add to cart: {error}"))?;

            let item = product
                .line_item(args.size.as_deref(), args.color.as_deref(), args.quantity)
                .map_err(|error| format!("failed to add to cart: {error}"))?;

            info!(key = %item.key(), quantity = item.quantity, "adding to cart");

            cart.add(item)
        }
        CartSubcommand::Remove(args) => cart.remove(args.key()),
        CartSubcommand::Update(args) => cart.update_quantity(args.line.key(), args.quantity),
        CartSubcommand::Clear => cart.clear(),
    };

    println!("{}", render_cart(state));

    Ok(())
}
