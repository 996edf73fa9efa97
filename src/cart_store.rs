//! Session-keyed cart state.
//!
//! The store is an injected abstraction rather than a hard-coded global map,
//! so a multi-instance deployment can swap the in-process implementation for
//! an external key-value store without touching the orchestrator.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use voicecart_types::{Cart, CartLine, MenuItem};

/// Per-session cart operations.
///
/// Implementations must keep each operation atomic for its session key and
/// must finish every mutation by recomputing the total from the items, so a
/// cart can never be observed with a total inconsistent with its lines.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Returns the session's cart, creating an empty one on first reference.
    async fn get(&self, session_id: &str) -> Cart;

    /// Appends one quantity-1 line per matched item and returns the updated
    /// cart. Repeat matches of the same item stay separate lines.
    async fn apply_additions(&self, session_id: &str, matches: &[MenuItem]) -> Cart;

    /// Removes ALL lines carrying `menu_item_id` (filter semantics, not one
    /// instance). Removing an id that is not in the cart is a no-op.
    async fn remove_line(&self, session_id: &str, menu_item_id: i64) -> Cart;

    /// Resets the cart to empty with total 0.
    async fn clear(&self, session_id: &str) -> Cart;
}

/// In-process [`CartStore`] for single-instance deployments.
///
/// Carts live behind a per-session mutex inside a shared map: operations on
/// one session are serialized, operations on different sessions only contend
/// on the brief map lookup. Carts are never evicted; they live for the
/// process lifetime.
#[derive(Default)]
pub struct InMemoryCartStore {
    carts: RwLock<HashMap<String, Arc<Mutex<Cart>>>>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn entry(&self, session_id: &str) -> Arc<Mutex<Cart>> {
        if let Some(cart) = self.carts.read().await.get(session_id) {
            return Arc::clone(cart);
        }
        let mut carts = self.carts.write().await;
        // Another request may have created the entry between the locks.
        Arc::clone(
            carts
                .entry(session_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(Cart::new(session_id)))),
        )
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn get(&self, session_id: &str) -> Cart {
        self.entry(session_id).await.lock().await.clone()
    }

    async fn apply_additions(&self, session_id: &str, matches: &[MenuItem]) -> Cart {
        let entry = self.entry(session_id).await;
        let mut cart = entry.lock().await;
        cart.items
            .extend(matches.iter().map(CartLine::from_menu_item));
        cart.recompute_total();
        cart.clone()
    }

    async fn remove_line(&self, session_id: &str, menu_item_id: i64) -> Cart {
        let entry = self.entry(session_id).await;
        let mut cart = entry.lock().await;
        cart.items.retain(|line| line.menu_item_id != menu_item_id);
        cart.recompute_total();
        cart.clone()
    }

    async fn clear(&self, session_id: &str) -> Cart {
        let entry = self.entry(session_id).await;
        let mut cart = entry.lock().await;
        cart.items.clear();
        cart.recompute_total();
        cart.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn item(id: i64, name: &str, price: Decimal) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            price,
            currency: "USD".to_string(),
            category: "test".to_string(),
        }
    }

    #[tokio::test]
    async fn get_creates_empty_cart_lazily() {
        let store = InMemoryCartStore::new();
        let cart = store.get("fresh").await;
        assert_eq!(cart.session_id, "fresh");
        assert!(cart.items.is_empty());
        assert_eq!(cart.total, Decimal::ZERO);
    }

    #[tokio::test]
    async fn additions_append_separate_lines_without_merging() {
        let store = InMemoryCartStore::new();
        let burger = item(1, "burger", dec!(8.99));
        store.apply_additions("s", &[burger.clone()]).await;
        let cart = store.apply_additions("s", &[burger]).await;
        // Same item twice: two quantity-1 lines, not one quantity-2 line.
        assert_eq!(cart.items.len(), 2);
        assert!(cart.items.iter().all(|l| l.quantity == 1));
        assert_eq!(cart.total, dec!(17.98));
    }

    #[tokio::test]
    async fn remove_line_drops_every_line_for_the_id() {
        let store = InMemoryCartStore::new();
        let burger = item(1, "burger", dec!(8.99));
        let fries = item(2, "fries", dec!(4.50));
        store
            .apply_additions("s", &[burger.clone(), fries, burger])
            .await;
        let cart = store.remove_line("s", 1).await;
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].menu_item_id, 2);
        assert_eq!(cart.total, dec!(4.50));
    }

    #[tokio::test]
    async fn removing_absent_id_is_a_noop_with_consistent_total() {
        let store = InMemoryCartStore::new();
        store.apply_additions("s", &[item(1, "burger", dec!(8.99))]).await;
        let cart = store.remove_line("s", 999).await;
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total, dec!(8.99));
    }

    #[tokio::test]
    async fn clear_resets_items_and_total() {
        let store = InMemoryCartStore::new();
        store.apply_additions("s", &[item(1, "burger", dec!(8.99))]).await;
        let cart = store.clear("s").await;
        assert!(cart.items.is_empty());
        assert_eq!(cart.total, Decimal::ZERO);
        let reread = store.get("s").await;
        assert!(reread.items.is_empty());
    }

    #[tokio::test]
    async fn total_invariant_holds_across_mixed_operation_sequences() {
        let store = InMemoryCartStore::new();
        let menu = [
            item(1, "burger", dec!(8.99)),
            item(2, "fries", dec!(4.50)),
            item(3, "bucket", dec!(129.99)),
        ];
        // A fixed pseudo-random walk over the three operations.
        for step in 0u64..200 {
            let roll = step.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407) % 10;
            let cart = match roll {
                0..=5 => {
                    let pick = &menu[(roll % 3) as usize];
                    store.apply_additions("walk", std::slice::from_ref(pick)).await
                }
                6..=8 => store.remove_line("walk", (roll % 4) as i64).await,
                _ => store.clear("walk").await,
            };
            let expected: Decimal = cart.items.iter().map(|l| l.line_total()).sum();
            assert_eq!(cart.total, expected, "total drifted at step {step}");
        }
    }

    #[tokio::test]
    async fn concurrent_additions_on_one_session_both_land() {
        let store = Arc::new(InMemoryCartStore::new());
        let burger = item(1, "burger", dec!(8.99));
        let fries = item(2, "fries", dec!(4.50));

        let a = {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.apply_additions("race", &[burger]).await })
        };
        let b = {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.apply_additions("race", &[fries]).await })
        };
        a.await.unwrap();
        b.await.unwrap();

        let cart = store.get("race").await;
        assert_eq!(cart.items.len(), 2, "an addition was lost");
        assert_eq!(cart.total, dec!(13.49));
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = InMemoryCartStore::new();
        store.apply_additions("a", &[item(1, "burger", dec!(8.99))]).await;
        let other = store.get("b").await;
        assert!(other.items.is_empty());
    }
}
