use clap::{Args, Subcommand};
use tanabana::orders::{OrderStats, OrdersService};
use tanabana_app::{
    context::AppContext,
    output::{render_order_stats, render_orders},
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// List a user's orders, newest first
    List(ListOrdersArgs),
    /// Show a single order
    Show(ShowOrderArgs),
}

#[derive(Debug, Args)]
struct ListOrdersArgs {
    /// User whose orders should be listed
    #[arg(long, env = "TANABANA_USER")]
    user: Uuid,
}

#[derive(Debug, Args)]
struct ShowOrderArgs {
    /// Order id
    order: Uuid,

    /// User the order belongs to
    #[arg(long, env = "TANABANA_USER")]
    user: Uuid,
}

pub(crate) fn run(context: &AppContext, command: OrdersCommand) -> Result<(), String> {
    let orders = context.orders().map_err(|error| error.to_string())?;

    match command.command {
        OrdersSubcommand::List(args) => {
            let history = orders
                .orders_for_user(args.user.into())
                .map_err(|error| format!("failed to list orders: {error}"))?;

            println!("{}", render_orders(&history));
            println!("{}", render_order_stats(&OrderStats::new(&history)));
        }
        OrdersSubcommand::Show(args) => {
            let order = orders
                .get_order(args.user.into(), args.order.into())
                .map_err(|error| error.to_string())?;

            println!("{}", render_orders(&[order]));
        }
    }

    Ok(())
}
