//! # Ledger Record
//!
//! Persistence for finalized orders: a JSON array of `Order` under the
//! `ledger` key, stored in ledger order (newest-inserted-first). The
//! fallback is an empty ledger - lost history is survivable, a crashed
//! register is not.

use tracing::warn;

use bliss_core::order::Order;

use crate::error::StoreResult;
use crate::kv::KvStore;

/// Key the ledger record is stored under.
pub const LEDGER_KEY: &str = "ledger";

/// Loads the ledger record, falling back to an empty ledger.
///
/// Never fails: read errors and unparsable records are logged and
/// replaced by the default, mirroring the catalog record's policy.
pub fn load(store: &dyn KvStore) -> Vec<Order> {
    let raw = match store.get(LEDGER_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "ledger record unreadable, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(orders) => orders,
        Err(e) => {
            warn!(error = %e, "ledger record unparsable, starting empty");
            Vec::new()
        }
    }
}

/// Saves the full ledger record (whole-collection overwrite).
pub fn save(store: &mut dyn KvStore, orders: &[Order]) -> StoreResult<()> {
    let raw = serde_json::to_string(orders)?;
    store.put(LEDGER_KEY, &raw)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use bliss_core::order::OrderItem;
    use bliss_core::types::Customer;
    use chrono::{TimeZone, Utc};

    fn sample_order() -> Order {
        Order {
            id: "ORD-1714557600000".to_string(),
            customer: Customer::with_phone("Alex", "555-0100"),
            items: vec![OrderItem {
                menu_item_id: "taro-milk-tea".to_string(),
                name: "Taro Milk Tea".to_string(),
                unit_price_cents: 450,
                quantity: 2,
            }],
            subtotal_cents: 900,
            tax_cents: 72,
            total_cents: 972,
            placed_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_missing_record_yields_empty_ledger() {
        let store = MemoryStore::new();
        assert!(load(&store).is_empty());
    }

    #[test]
    fn test_corrupt_record_yields_empty_ledger() {
        let mut store = MemoryStore::new();
        store.put(LEDGER_KEY, "??").unwrap();
        assert!(load(&store).is_empty());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let mut store = MemoryStore::new();
        let orders = vec![sample_order()];

        save(&mut store, &orders).unwrap();
        let loaded = load(&store);
        assert_eq!(loaded, orders);
        // Timestamps survive as orderable ISO-8601.
        assert_eq!(loaded[0].placed_at, orders[0].placed_at);
    }

    #[test]
    fn test_record_is_iso_8601_on_disk() {
        let mut store = MemoryStore::new();
        save(&mut store, &[sample_order()]).unwrap();
        let raw = store.get(LEDGER_KEY).unwrap().unwrap();
        assert!(raw.contains("2024-05-01T10:00:00Z"));
    }
}
