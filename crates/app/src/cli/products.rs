use clap::{Args, Subcommand};
use tanabana::catalog::{
    CatalogService, Category, PriceRange, ProductId, ProductQuery, SortOrder,
};
use tanabana_app::{
    context::AppContext,
    output::{render_product, render_products},
};

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List products, optionally filtered
    List(ListArgs),
    /// Show one product
    Show(ShowArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Name contains this text (case-insensitive)
    #[arg(short, long)]
    search: Option<String>,

    /// Only this category
    #[arg(short, long)]
    category: Option<Category>,

    /// Price range, e.g. 50-100 or 200-
    #[arg(short, long)]
    price: Option<PriceRange>,

    /// Only products offered in this colour
    #[arg(long)]
    color: Option<String>,

    /// Only products offered in this size
    #[arg(long)]
    size: Option<String>,

    /// name, price-asc, price-desc or newest
    #[arg(long, default_value = "name")]
    sort: SortOrder,
}

impl From<ListArgs> for ProductQuery {
    fn from(args: ListArgs) -> Self {
        ProductQuery {
            search: args.search,
            category: args.category,
            price: args.price,
            color: args.color,
            size: args.size,
            sort: args.sort,
        }
    }
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Catalog product id
    product: String,
}

pub(crate) fn run(context: &AppContext, command: ProductsCommand) -> Result<(), String> {
    let catalog = context.catalog().map_err(|error| error.to_string())?;

    match command.command {
        ProductsSubcommand::List(args) => {
            let products = catalog
                .list_products(&args.into())
                .map_err(|error| format!("failed to list products: {error}"))?;

            println!("{}", render_products(&products));
        }
        ProductsSubcommand::Show(args) => {
            let product = catalog
                .get_product(&ProductId::from(args.product))
                .map_err(|error| error.to_string())?;

            println!("{}", render_product(&product));
        }
    }

    Ok(())
}
