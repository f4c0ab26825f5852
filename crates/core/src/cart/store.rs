//! Cart Store

use tracing::{debug, warn};

use crate::{
    cart::{
        items::{LineItem, LineItemKey},
        state::{CartAction, CartState},
    },
    storage::Slot,
};

/// Slot key the storefront persists its cart under.
pub const DEFAULT_CART_KEY: &str = "tanabana-cart";

/// Owns the cart for one session and keeps a durable copy of its items.
///
/// The persisted copy is read exactly once, when the store is opened. Every mutation then
/// overwrites it with the full item list. Writes are best effort: a failed write is logged and the
/// in-memory transition stands.
///
/// Stores sharing a slot are not coordinated. The last one to write wins, and an open store never
/// sees writes made by another.
#[derive(Debug)]
pub struct CartStore<S: Slot> {
    slot: S,
    key: String,
    state: CartState,
}

impl<S: Slot> CartStore<S> {
    /// Open a store on `slot` under [`DEFAULT_CART_KEY`], restoring whatever was persisted.
    pub fn open(slot: S) -> Self {
        Self::open_with_key(slot, DEFAULT_CART_KEY)
    }

    /// Open a store on `slot` under a custom key, restoring whatever was persisted.
    ///
    /// Missing or unreadable data yields an empty cart.
    pub fn open_with_key(slot: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = restore(&slot, &key);

        debug!(
            key = %key,
            items = state.len(),
            item_count = state.item_count(),
            "opened cart"
        );

        Self { slot, key, state }
    }

    /// Current cart state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Slot key this store persists to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Add an item, merging it into an existing entry with the same identity.
    pub fn add(&mut self, item: LineItem) -> &CartState {
        self.dispatch(CartAction::Add(item))
    }

    /// Remove the item with the given identity, if present.
    pub fn remove(&mut self, key: LineItemKey) -> &CartState {
        self.dispatch(CartAction::Remove(key))
    }

    /// Set the quantity of the item with the given identity. Zero or less removes it.
    pub fn update_quantity(&mut self, key: LineItemKey, quantity: i64) -> &CartState {
        self.dispatch(CartAction::UpdateQuantity { key, quantity })
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> &CartState {
        self.dispatch(CartAction::Clear)
    }

    /// End the session, handing back the slot.
    pub fn close(self) -> S {
        self.slot
    }

    fn dispatch(&mut self, action: CartAction) -> &CartState {
        self.state.apply(action);

        debug!(
            items = self.state.len(),
            item_count = self.state.item_count(),
            total = %self.state.total(),
            "cart updated"
        );

        self.persist();

        &self.state
    }

    fn persist(&mut self) {
        let value = match serde_json::to_string(self.state.items()) {
            Ok(value) => value,
            Err(error) => {
                warn!(key = %self.key, "failed to serialize cart: {error}");
                return;
            }
        };

        if let Err(error) = self.slot.write(&self.key, &value) {
            warn!(key = %self.key, "failed to persist cart: {error}");
        }
    }
}

fn restore<S: Slot>(slot: &S, key: &str) -> CartState {
    let raw = match slot.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return CartState::new(),
        Err(error) => {
            warn!(key, "failed to read persisted cart: {error}");
            return CartState::new();
        }
    };

    match serde_json::from_str::<Vec<LineItem>>(&raw) {
        Ok(items) => CartState::from_items(items),
        Err(error) => {
            warn!(key, "discarding unreadable persisted cart: {error}");
            CartState::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        catalog::ProductId,
        storage::{FileSlot, MemorySlot, MockSlot, SlotError},
    };

    use super::*;

    fn item(id: &str, price: i64, quantity: i64, size: &str, color: &str) -> LineItem {
        LineItem {
            product_id: ProductId::from(id),
            name: format!("Product {id}"),
            unit_price: Decimal::from(price),
            image_url: String::new(),
            quantity,
            size: size.to_string(),
            color: color.to_string(),
        }
    }

    fn persisted(slot: &MemorySlot) -> Result<Vec<LineItem>, Box<dyn std::error::Error>> {
        let raw = slot.read(DEFAULT_CART_KEY)?.unwrap_or_default();

        Ok(serde_json::from_str(&raw)?)
    }

    #[test]
    fn opens_empty_without_persisted_state() {
        let store = CartStore::open(MemorySlot::new());

        assert!(store.state().is_empty());
        assert_eq!(store.key(), DEFAULT_CART_KEY);
    }

    #[test]
    fn opens_empty_when_persisted_state_is_garbage() {
        let store = CartStore::open(MemorySlot::with_value(DEFAULT_CART_KEY, "{not json"));

        assert!(store.state().is_empty());
    }

    #[test]
    fn opens_empty_when_slot_read_fails() {
        let mut slot = MockSlot::new();
        slot.expect_read()
            .returning(|_| Err(SlotError::InvalidKey("broken".to_string())));

        let store = CartStore::open(slot);

        assert!(store.state().is_empty());
    }

    #[test]
    fn restores_persisted_items_and_recomputes_aggregates() {
        let raw = r#"[
            {"id":"p1","name":"Dress","price":20,"image_url":"","quantity":2,"size":"M","color":"Black"},
            {"id":"p2","name":"Scarf","price":7.5,"image_url":"","quantity":1,"size":"OS","color":"Red"}
        ]"#;

        let store = CartStore::open(MemorySlot::with_value(DEFAULT_CART_KEY, raw));

        assert_eq!(store.state().len(), 2);
        assert_eq!(store.state().total(), Decimal::new(475, 1));
        assert_eq!(store.state().item_count(), 3);
    }

    #[test]
    fn every_mutation_persists_items() -> TestResult {
        let mut store = CartStore::open(MemorySlot::new());

        store.add(item("p1", 20, 1, "M", "Black"));
        store.add(item("p2", 10, 1, "S", "Red"));

        let slot = store.close();
        assert_eq!(persisted(&slot)?.len(), 2);

        let mut store = CartStore::open(slot);
        store.remove(LineItemKey::new("p2", "S", "Red"));
        store.update_quantity(LineItemKey::new("p1", "M", "Black"), 4);

        let slot = store.close();
        let items = persisted(&slot)?;

        assert_eq!(items.len(), 1);
        assert_eq!(items.first().map(|i| i.quantity), Some(4));

        Ok(())
    }

    #[test]
    fn clear_persists_empty_list() -> TestResult {
        let mut store = CartStore::open(MemorySlot::new());

        store.add(item("p1", 20, 1, "M", "Black"));
        let state = store.clear();

        assert!(state.is_empty());
        assert_eq!(state.total(), Decimal::ZERO);
        assert_eq!(state.item_count(), 0);

        let slot = store.close();
        assert_eq!(slot.read(DEFAULT_CART_KEY)?, Some("[]".to_string()));

        Ok(())
    }

    #[test]
    fn persists_under_custom_key() -> TestResult {
        let mut store = CartStore::open_with_key(MemorySlot::new(), "guest-cart");

        store.add(item("p1", 20, 1, "M", "Black"));

        let slot = store.close();

        assert!(slot.read("guest-cart")?.is_some());
        assert!(slot.read(DEFAULT_CART_KEY)?.is_none());

        Ok(())
    }

    #[test]
    fn failed_write_keeps_in_memory_state() {
        let mut slot = MockSlot::new();
        slot.expect_read().returning(|_| Ok(None));
        slot.expect_write()
            .times(2)
            .returning(|_, _| Err(SlotError::InvalidKey("quota".to_string())));

        let mut store = CartStore::open(slot);

        store.add(item("p1", 20, 1, "M", "Black"));
        let state = store.add(item("p1", 20, 2, "M", "Black"));

        assert_eq!(state.item_count(), 3);
        assert_eq!(state.total(), Decimal::from(60));
    }

    #[test]
    fn writes_the_item_list_not_the_aggregates() {
        let mut slot = MockSlot::new();
        slot.expect_read().returning(|_| Ok(None));
        slot.expect_write()
            .withf(|key, value| {
                key.to_string() == DEFAULT_CART_KEY
                    && value.starts_with('[')
                    && !value.contains("total")
                    && !value.contains("item_count")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut store = CartStore::open(slot);

        store.add(item("p1", 20, 1, "M", "Black"));
    }

    #[test]
    fn remove_on_empty_cart_is_noop() {
        let mut store = CartStore::open(MemorySlot::new());

        let state = store.remove(LineItemKey::new("p9", "S", "Red"));

        assert_eq!(*state, CartState::new());
    }

    #[test]
    fn stores_sharing_a_slot_are_last_writer_wins() -> TestResult {
        let dir = tempfile::tempdir()?;

        let mut first = CartStore::open(FileSlot::new(dir.path()));
        let mut second = CartStore::open(FileSlot::new(dir.path()));

        first.add(item("p1", 20, 1, "M", "Black"));

        assert!(second.state().is_empty(), "open stores never re-read the slot");

        second.add(item("p2", 10, 1, "S", "Red"));

        let reopened = CartStore::open(FileSlot::new(dir.path()));

        assert_eq!(reopened.state().len(), 1);
        assert!(
            reopened
                .state()
                .get(&LineItemKey::new("p2", "S", "Red"))
                .is_some()
        );

        Ok(())
    }
}
