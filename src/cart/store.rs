//! CartStore - the single owner of the cart and its persisted mirror.

use tracing::{debug, warn};

use super::validate::{validate_persisted, ResetReason, Validated};
use super::{parse_price, CartError, CartEvent, CartItem};
use crate::storage::{KeyValueStore, CART_KEY};

/// What a sync found in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncReport {
    /// Persisted cart was valid as-is
    Loaded { count: usize },
    /// Invalid elements were dropped and the remainder written back
    Repaired { kept: usize, discarded: usize },
    /// Persisted cart was replaced with an empty one
    Reset(ResetReason),
}

/// In-memory cart mirrored to a [`KeyValueStore`] under [`CART_KEY`].
///
/// Storage failures never escape: reads fall back to an empty cart and
/// failed writes are logged.
pub struct CartStore<S> {
    storage: S,
    items: Vec<CartItem>,
    synced: bool,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create an unsynced store. The first mutation or [`sync`](Self::sync)
    /// loads persisted state.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            items: Vec::new(),
            synced: false,
        }
    }

    /// Create a store and immediately reconcile it with storage.
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.sync();
        store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all item prices.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Reload from storage, repairing whatever is invalid.
    pub fn sync(&mut self) -> SyncReport {
        self.synced = true;

        let validated = match self.storage.get_item(CART_KEY) {
            Ok(raw) => validate_persisted(raw.as_deref()),
            Err(e) => {
                warn!("Failed to read cart from storage: {}", e);
                Validated::Reset(ResetReason::StorageUnavailable)
            }
        };

        let report = match &validated {
            Validated::Items(items) => SyncReport::Loaded { count: items.len() },
            Validated::Filtered { items, discarded } => {
                warn!("Dropped {} invalid cart item(s) from storage", discarded);
                SyncReport::Repaired {
                    kept: items.len(),
                    discarded: *discarded,
                }
            }
            Validated::Reset(reason) => {
                if !matches!(reason, ResetReason::Missing | ResetReason::Empty) {
                    warn!(?reason, "Resetting persisted cart");
                }
                SyncReport::Reset(*reason)
            }
        };

        let needs_persist = validated.needs_persist();
        self.items = validated.into_items();
        if needs_persist {
            self.persist();
        }

        report
    }

    /// Append an item. `price` is the raw attribute text and is coerced
    /// to a number.
    pub fn add(&mut self, product: &str, price: &str) -> Result<CartEvent, CartError> {
        let price = parse_price(price).ok_or_else(|| CartError::InvalidPrice(price.to_string()))?;
        let item = CartItem::new(product, price)?;

        if !self.synced {
            self.sync();
        }

        debug!(product = %item.product, price = item.price, "Adding to cart");
        self.items.push(item);
        self.persist();

        Ok(CartEvent::Added(product.to_string()))
    }

    /// Remove the item at `index` after re-reading storage. Out-of-range
    /// indices are ignored and return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<CartEvent> {
        self.sync();

        if index >= self.items.len() {
            debug!(index, len = self.items.len(), "Ignoring out-of-range removal");
            return None;
        }

        let removed = self.items.remove(index);
        debug!(product = %removed.product, "Removed from cart");
        self.persist();

        Some(if self.items.is_empty() {
            CartEvent::Emptied
        } else {
            CartEvent::Removed
        })
    }

    /// Empty the cart. Callers are expected to have confirmed with the user.
    pub fn clear(&mut self) -> CartEvent {
        self.reset_empty();
        CartEvent::Cleared
    }

    /// Checkout submission: the order is accepted and the cart emptied.
    pub fn place_order(&mut self) -> CartEvent {
        debug!(items = self.items.len(), total = self.total(), "Placing order");
        self.reset_empty();
        CartEvent::OrderPlaced
    }

    fn reset_empty(&mut self) {
        self.synced = true;
        self.items.clear();
        self.persist();
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.items) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to encode cart: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set_item(CART_KEY, &json) {
            warn!("Failed to persist cart: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{LocalStorage, MemoryStore};

    fn persisted(store: &MemoryStore) -> serde_json::Value {
        serde_json::from_str(&store.raw(CART_KEY).unwrap()).unwrap()
    }

    #[test]
    fn test_sync_resets_unparsable() {
        let storage = MemoryStore::with_item(CART_KEY, "not json");
        let mut cart = CartStore::new(&storage);

        assert_eq!(cart.sync(), SyncReport::Reset(ResetReason::Unparsable));
        assert!(cart.is_empty());
        assert_eq!(storage.raw(CART_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_sync_resets_missing() {
        let storage = MemoryStore::new();
        let cart = CartStore::open(&storage);

        assert!(cart.is_empty());
        assert_eq!(storage.raw(CART_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_sync_repairs_invalid_elements() {
        let storage =
            MemoryStore::with_item(CART_KEY, r#"[{"product":"A","price":1},{"product":"B"}]"#);
        let mut cart = CartStore::new(&storage);

        assert_eq!(
            cart.sync(),
            SyncReport::Repaired {
                kept: 1,
                discarded: 1
            }
        );
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].product, "A");
        assert_eq!(
            persisted(&storage),
            serde_json::json!([{"product": "A", "price": 1.0}])
        );
    }

    #[test]
    fn test_sync_valid_leaves_storage_untouched() {
        let raw = r#"[{"product":"A","price":1}]"#;
        let storage = MemoryStore::with_item(CART_KEY, raw);
        let mut cart = CartStore::new(&storage);

        assert_eq!(cart.sync(), SyncReport::Loaded { count: 1 });
        assert_eq!(storage.raw(CART_KEY).as_deref(), Some(raw));
    }

    #[test]
    fn test_add_appends_in_order() {
        let storage = MemoryStore::new();
        let mut cart = CartStore::new(&storage);

        assert_eq!(
            cart.add("Mug", "9.99"),
            Ok(CartEvent::Added("Mug".to_string()))
        );
        cart.add("Pen", "1").unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0].product, "Mug");
        assert_eq!(cart.items()[1].product, "Pen");
        assert_eq!(format!("{:.2}", cart.total()), "10.99");

        // A fresh store sees the same persisted cart.
        let reopened = CartStore::open(&storage);
        assert_eq!(reopened.items(), cart.items());
    }

    #[test]
    fn test_add_syncs_first_use_only() {
        let storage = MemoryStore::with_item(CART_KEY, r#"[{"product":"Lamp","price":20}]"#);
        let mut cart = CartStore::new(&storage);

        cart.add("Mug", "5").unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0].product, "Lamp");
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let storage = MemoryStore::new();
        let mut cart = CartStore::new(&storage);

        assert_eq!(cart.add("", "5"), Err(CartError::EmptyProduct));
        assert_eq!(
            cart.add("Mug", "free"),
            Err(CartError::InvalidPrice("free".to_string()))
        );
        assert!(cart.is_empty());
        assert_eq!(storage.raw(CART_KEY), None);
    }

    #[test]
    fn test_remove_last_item_empties_cart() {
        let storage = MemoryStore::new();
        let mut cart = CartStore::new(&storage);
        cart.add("Mug", "9.99").unwrap();

        assert_eq!(cart.remove_at(0), Some(CartEvent::Emptied));
        assert_eq!(cart.len(), 0);
        assert_eq!(storage.raw(CART_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_remove_keeps_remaining_items() {
        let storage = MemoryStore::new();
        let mut cart = CartStore::new(&storage);
        cart.add("Mug", "9.99").unwrap();
        cart.add("Pen", "1").unwrap();

        assert_eq!(cart.remove_at(0), Some(CartEvent::Removed));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].product, "Pen");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let storage = MemoryStore::new();
        let mut cart = CartStore::new(&storage);
        cart.add("Mug", "9.99").unwrap();

        assert_eq!(cart.remove_at(5), None);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].product, "Mug");
    }

    #[test]
    fn test_remove_resyncs_from_storage() {
        let storage = MemoryStore::new();
        let mut cart = CartStore::new(&storage);
        cart.add("Mug", "9.99").unwrap();

        // Storage corrupted behind the store's back.
        storage.set_item(CART_KEY, "garbage").unwrap();

        assert_eq!(cart.remove_at(0), None);
        assert!(cart.is_empty());
        assert_eq!(storage.raw(CART_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_clear_and_place_order() {
        let storage = MemoryStore::new();
        let mut cart = CartStore::new(&storage);
        cart.add("Mug", "9.99").unwrap();

        assert_eq!(cart.clear(), CartEvent::Cleared);
        assert!(cart.is_empty());
        assert_eq!(storage.raw(CART_KEY).as_deref(), Some("[]"));

        cart.add("Pen", "1").unwrap();
        assert_eq!(cart.place_order(), CartEvent::OrderPlaced);
        assert!(cart.is_empty());
        assert_eq!(storage.raw(CART_KEY).as_deref(), Some("[]"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_unavailable_storage_degrades_to_memory() {
        let mut cart = CartStore::new(LocalStorage);

        assert_eq!(
            cart.sync(),
            SyncReport::Reset(ResetReason::StorageUnavailable)
        );
        cart.add("Mug", "9.99").unwrap();
        assert_eq!(cart.len(), 1);
    }
}
