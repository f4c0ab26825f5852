//! Order Summary

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::cart::state::CartState;

/// Sales tax charged on the cart subtotal.
pub fn tax_rate() -> Percentage {
    Percentage::from(Decimal::new(8, 2))
}

/// Checkout figures derived from a cart. Shipping is always free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    item_count: i64,
    subtotal: Decimal,
    tax: Decimal,
}

impl CartSummary {
    /// Summarise a cart.
    pub fn new(state: &CartState) -> Self {
        let subtotal = state.total();

        Self {
            item_count: state.item_count(),
            subtotal,
            tax: tax_rate() * subtotal,
        }
    }

    /// Units in the cart.
    pub fn item_count(&self) -> i64 {
        self.item_count
    }

    /// Cart total before tax.
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Shipping charge.
    pub fn shipping(&self) -> Decimal {
        Decimal::ZERO
    }

    /// Tax on the subtotal, unrounded.
    pub fn tax(&self) -> Decimal {
        self.tax
    }

    /// Amount payable. Saturates at [`Decimal::MAX`] like the cart aggregates it is built from.
    pub fn total(&self) -> Decimal {
        self.subtotal
            .saturating_add(self.shipping())
            .saturating_add(self.tax)
    }
}

impl From<&CartState> for CartSummary {
    fn from(state: &CartState) -> Self {
        Self::new(state)
    }
}
