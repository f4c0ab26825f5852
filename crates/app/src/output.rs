//! Terminal output

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use tanabana::{
    cart::{CartState, CartSummary},
    catalog::Product,
    orders::{Order, OrderStats},
};

fn money(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

/// Render the cart as a table followed by the order summary.
pub fn render_cart(state: &CartState) -> String {
    if state.is_empty() {
        return "Your cart is empty".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Product", "Size", "Color", "Qty", "Price", "Line total"]);

    for item in state.items() {
        builder.push_record([
            item.name.clone(),
            item.size.clone(),
            item.color.clone(),
            item.quantity.to_string(),
            money(item.unit_price),
            money(item.line_total()),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.modify(Columns::new(3..6), Alignment::right());

    let summary = CartSummary::new(state);

    format!(
        "{table}\nSubtotal ({} items): {}\nShipping: FREE\nTax: {}\nTotal: {}",
        summary.item_count(),
        money(summary.subtotal()),
        money(summary.tax()),
        money(summary.total()),
    )
}

/// Render a product listing.
pub fn render_products(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products found".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Id", "Name", "Category", "Price", "Sizes", "Colors"]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.category.to_string(),
            money(product.price),
            product.sizes.join(", "),
            product.colors.join(", "),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());

    table.to_string()
}

/// Render a single product's details.
pub fn render_product(product: &Product) -> String {
    format!(
        "{}\n{}\n\nPrice: {}\nCategory: {}\nSizes: {}\nColors: {}\nId: {}",
        product.name,
        product.description,
        money(product.price),
        product.category,
        product.sizes.join(", "),
        product.colors.join(", "),
        product.id,
    )
}

/// Render order history.
pub fn render_orders(orders: &[Order]) -> String {
    if orders.is_empty() {
        return "No orders yet".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Order", "Placed", "Status", "Total", "Reorder"]);

    for order in orders {
        builder.push_record([
            order.id.to_string(),
            order.created_at.strftime("%Y-%m-%d").to_string(),
            order.status.to_string(),
            money(order.total_amount),
            if order.can_reorder() { "yes" } else { "" }.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());

    table.to_string()
}

/// Render order history counts.
pub fn render_order_stats(stats: &OrderStats) -> String {
    format!(
        "Total orders: {}\nPending: {}\nShipped: {}\nDelivered: {}",
        stats.total, stats.pending, stats.shipped, stats.delivered,
    )
}

#[cfg(test)]
mod tests {
    use tanabana::{
        cart::{CartAction, LineItem},
        catalog::ProductId,
        orders::{OrderStatus, OrderUuid},
        profiles::UserUuid,
    };

    use super::*;

    #[test]
    fn empty_cart_has_friendly_message() {
        assert_eq!(render_cart(&CartState::new()), "Your cart is empty");
    }

    #[test]
    fn cart_render_includes_lines_and_summary() {
        let mut state = CartState::new();
        state.apply(CartAction::Add(LineItem {
            product_id: ProductId::from("p1"),
            name: "Linen Wrap Dress".to_string(),
            unit_price: Decimal::new(8900, 2),
            image_url: String::new(),
            quantity: 2,
            size: "M".to_string(),
            color: "Sand".to_string(),
        }));

        let rendered = render_cart(&state);

        assert!(rendered.contains("Linen Wrap Dress"));
        assert!(rendered.contains("$178.00"));
        assert!(rendered.contains("Subtotal (2 items): $178.00"));
        assert!(rendered.contains("Tax: $14.24"));
        assert!(rendered.contains("Total: $192.24"));
    }

    #[test]
    fn money_rounds_to_cents() {
        assert_eq!(money(Decimal::new(14_2400, 4)), "$14.24");
        assert_eq!(money(Decimal::new(5, 0)), "$5.00");
    }

    #[test]
    fn order_history_marks_delivered_orders_for_reorder() {
        let order = Order {
            id: OrderUuid::now_v7(),
            user_id: UserUuid::now_v7(),
            total_amount: Decimal::new(12_900, 2),
            status: OrderStatus::Delivered,
            created_at: jiff::Timestamp::UNIX_EPOCH,
            updated_at: jiff::Timestamp::UNIX_EPOCH,
        };
        let orders = [order];

        let table = render_orders(&orders);
        let stats = render_order_stats(&OrderStats::new(&orders));

        assert!(table.contains("yes"));
        assert!(table.contains("$129.00"));
        assert!(stats.contains("Total orders: 1"));
        assert!(stats.contains("Delivered: 1"));
    }
}
