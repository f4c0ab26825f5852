//! Cart State

use rust_decimal::Decimal;

use crate::cart::items::{LineItem, LineItemKey};

/// A transition of the cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Merge an item into the cart, or append it if its identity is new.
    Add(LineItem),

    /// Drop the item with this identity.
    Remove(LineItemKey),

    /// Set the quantity of the item with this identity.
    UpdateQuantity {
        /// Item to update.
        key: LineItemKey,
        /// New quantity; zero or less removes the item.
        quantity: i64,
    },

    /// Empty the cart.
    Clear,

    /// Replace the cart with a previously persisted item list.
    Load(Vec<LineItem>),
}

/// The cart aggregate.
///
/// `total` and `item_count` are derived from `items` and recomputed on every transition; there is
/// no way to set them directly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    items: Vec<LineItem>,
    total: Decimal,
    item_count: i64,
}

impl CartState {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from a list of items, merging duplicate identities and dropping anything
    /// without a positive quantity.
    pub fn from_items(items: impl Into<Vec<LineItem>>) -> Self {
        let mut state = Self::new();
        state.apply(CartAction::Load(items.into()));

        state
    }

    /// Items in the order they were first added.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of unit price times quantity over all items.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Sum of quantities over all items.
    pub fn item_count(&self) -> i64 {
        self.item_count
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up the item with the given identity.
    pub fn get(&self, key: &LineItemKey) -> Option<&LineItem> {
        self.items.iter().find(|item| item.is(key))
    }

    /// Apply a transition. Unknown identities are ignored rather than treated as errors.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::Add(item) => self.merge(item),
            CartAction::Remove(key) => self.items.retain(|item| !item.is(&key)),
            CartAction::UpdateQuantity { key, quantity } => {
                if let Some(item) = self.items.iter_mut().find(|item| item.is(&key)) {
                    item.quantity = quantity;
                }
            }
            CartAction::Clear => self.items.clear(),
            CartAction::Load(items) => {
                self.items.clear();
                items.into_iter().for_each(|item| self.merge(item));
            }
        }

        self.items.retain(|item| item.quantity > 0);
        self.recompute();
    }

    /// Merges in place so the item keeps its position and its original snapshot.
    fn merge(&mut self, item: LineItem) {
        let key = item.key();

        match self.items.iter_mut().find(|existing| existing.is(&key)) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => self.items.push(item),
        }
    }

    fn recompute(&mut self) {
        self.total = self
            .items
            .iter()
            .fold(Decimal::ZERO, |sum, item| sum.saturating_add(item.line_total()));

        self.item_count = self
            .items
            .iter()
            .fold(0, |count, item| count.saturating_add(item.quantity));
    }
}
