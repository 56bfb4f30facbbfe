//! Client-side cart state.
//!
//! The store mirrors the last server response and nothing else: every
//! cart mutation endpoint returns the full updated cart, and views push
//! that snapshot in wholesale. No merging, no recomputation, no network
//! calls from the store itself.

use std::sync::{Arc, PoisonError, RwLock};

use rust_decimal::Decimal;

use greenbasket_core::CartSnapshot;

/// Shared handle over the last-fetched cart snapshot.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    inner: Arc<RwLock<Option<CartSnapshot>>>,
}

impl CartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored snapshot wholesale.
    pub fn set(&self, snapshot: CartSnapshot) {
        *self.write() = Some(snapshot);
    }

    /// Drop the stored snapshot (e.g. on logout).
    pub fn clear(&self) {
        *self.write() = None;
    }

    /// A clone of the current snapshot, if one has been loaded.
    #[must_use]
    pub fn snapshot(&self) -> Option<CartSnapshot> {
        self.read().clone()
    }

    /// Server-computed item count; zero when no snapshot is loaded.
    #[must_use]
    pub fn item_count(&self) -> i64 {
        self.read().as_ref().map_or(0, |cart| cart.item_count)
    }

    /// Server-computed total; zero when no snapshot is loaded.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.read()
            .as_ref()
            .map_or(Decimal::ZERO, |cart| cart.total_price)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Option<CartSnapshot>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<CartSnapshot>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenbasket_core::{CartItem, ProductId, Unit};

    fn snapshot(item_count: i64, total: Decimal, items: Vec<CartItem>) -> CartSnapshot {
        CartSnapshot {
            id: None,
            items,
            total_price: total,
            item_count,
        }
    }

    fn item(product_id: u64, quantity: i64, price: Decimal, subtotal: Decimal) -> CartItem {
        CartItem {
            id: None,
            product_id: ProductId::new(product_id),
            product_name: String::new(),
            price,
            quantity: Decimal::from(quantity),
            unit: Unit::Piece,
            subtotal,
        }
    }

    #[test]
    fn test_defaults_to_zero_before_any_snapshot() {
        let store = CartStore::new();
        assert_eq!(store.item_count(), 0);
        assert_eq!(store.total_price(), Decimal::ZERO);
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn test_getters_mirror_snapshot() {
        let store = CartStore::new();
        store.set(snapshot(
            2,
            Decimal::new(70, 1),
            vec![item(1, 2, Decimal::new(35, 1), Decimal::new(70, 1))],
        ));
        assert_eq!(store.item_count(), 2);
        assert_eq!(store.total_price(), Decimal::new(70, 1));
    }

    #[test]
    fn test_set_replaces_wholesale() {
        let store = CartStore::new();
        store.set(snapshot(
            5,
            Decimal::new(100, 1),
            vec![
                item(1, 2, Decimal::new(35, 1), Decimal::new(70, 1)),
                item(2, 3, Decimal::ONE, Decimal::new(30, 1)),
            ],
        ));

        // A new response replaces the state entirely - no merge with prior items
        store.set(snapshot(
            2,
            Decimal::new(70, 1),
            vec![item(1, 2, Decimal::new(35, 1), Decimal::new(70, 1))],
        ));

        let cart = store.snapshot().expect("snapshot present");
        assert_eq!(cart.items.len(), 1);
        assert_eq!(store.item_count(), 2);
        assert_eq!(store.total_price(), Decimal::new(70, 1));
    }

    #[test]
    fn test_clear_resets_to_empty() {
        let store = CartStore::new();
        store.set(snapshot(1, Decimal::ONE, vec![]));
        store.clear();
        assert_eq!(store.item_count(), 0);
        assert!(store.snapshot().is_none());
    }
}
