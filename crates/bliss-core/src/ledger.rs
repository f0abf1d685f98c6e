//! # Order Ledger
//!
//! The durable, ordered collection of finalized orders.
//!
//! Ledger order is newest-inserted-first: `append` prepends, and that
//! insertion order is the only ordering the engine guarantees (it usually
//! coincides with timestamp order, but nothing downstream may assume so).
//! Deletion is idempotent by design - deleting an absent id is a no-op,
//! not an error, so a double-tap on the delete button stays harmless.

use serde::{Deserialize, Serialize};

use crate::order::Order;

// =============================================================================
// Ledger
// =============================================================================

/// Process-scoped store of finalized orders.
///
/// Mutated only by finalize (prepend) and delete (remove by id). Like the
/// catalog, it is loaded once at startup and written back by the register
/// after each mutation; the ledger itself performs no I/O.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    orders: Vec<Order>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger { orders: Vec::new() }
    }

    /// Creates a ledger from previously persisted orders.
    pub fn from_orders(orders: Vec<Order>) -> Self {
        Ledger { orders }
    }

    /// Prepends a finalized order (newest-inserted-first).
    pub fn append(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    /// Removes the order with the matching id.
    ///
    /// Returns whether anything was removed; an absent id is a no-op.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.orders.len();
        self.orders.retain(|o| o.id != id);
        self.orders.len() != before
    }

    /// The full ordered sequence, newest-inserted-first.
    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    /// Looks up an order by id.
    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Number of orders in the ledger.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Checks whether the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Customer;
    use chrono::{TimeZone, Utc};

    fn order(id: &str, total_cents: i64) -> Order {
        Order {
            id: id.to_string(),
            customer: Customer::new("Alex"),
            items: Vec::new(),
            subtotal_cents: total_cents,
            tax_cents: 0,
            total_cents,
            placed_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_append_prepends() {
        let mut ledger = Ledger::new();
        ledger.append(order("ORD-1", 1000));
        ledger.append(order("ORD-2", 2000));

        let ids: Vec<&str> = ledger.all().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-2", "ORD-1"]);
    }

    #[test]
    fn test_delete_removes_matching_order() {
        let mut ledger = Ledger::new();
        ledger.append(order("ORD-1", 1000));
        ledger.append(order("ORD-2", 2000));

        assert!(ledger.delete("ORD-1"));
        assert_eq!(ledger.len(), 1);
        assert!(ledger.get("ORD-1").is_none());
        assert!(ledger.get("ORD-2").is_some());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut ledger = Ledger::new();
        ledger.append(order("ORD-1", 1000));

        assert!(ledger.delete("ORD-1"));
        let after_first: Vec<String> = ledger.all().iter().map(|o| o.id.clone()).collect();

        // Second delete of the same id: no-op, same observable state.
        assert!(!ledger.delete("ORD-1"));
        let after_second: Vec<String> = ledger.all().iter().map(|o| o.id.clone()).collect();
        assert_eq!(after_first, after_second);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_delete_absent_id_is_noop() {
        let mut ledger = Ledger::new();
        ledger.append(order("ORD-1", 1000));
        assert!(!ledger.delete("ORD-404"));
        assert_eq!(ledger.len(), 1);
    }
}
