//! # Catalog Record
//!
//! Persistence for the menu: a JSON array of `MenuItem` under the
//! `catalog` key. When no usable record exists the starter catalog is
//! served instead, so a first boot (or a corrupted file) still puts a
//! sellable menu in front of the operator.

use tracing::warn;

use bliss_core::types::MenuItem;

use crate::error::StoreResult;
use crate::kv::KvStore;

/// Key the catalog record is stored under.
pub const CATALOG_KEY: &str = "catalog";

/// The built-in menu used when no catalog record exists yet.
pub fn starter_catalog() -> Vec<MenuItem> {
    [
        ("taro-milk-tea", "Taro Milk Tea", 450),
        ("strawberry-boba", "Strawberry Boba", 475),
        ("brown-sugar-latte", "Brown Sugar Latte", 500),
        ("matcha-latte", "Matcha Latte", 525),
    ]
    .into_iter()
    .map(|(id, name, price_cents)| MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        price_cents,
    })
    .collect()
}

/// Loads the catalog record, falling back to the starter catalog.
///
/// Never fails: a read error or a record that does not parse is logged
/// and replaced by the default. Storage corruption is not the operator's
/// problem to solve mid-shift.
pub fn load(store: &dyn KvStore) -> Vec<MenuItem> {
    let raw = match store.get(CATALOG_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return starter_catalog(),
        Err(e) => {
            warn!(error = %e, "catalog record unreadable, using starter catalog");
            return starter_catalog();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            warn!(error = %e, "catalog record unparsable, using starter catalog");
            starter_catalog()
        }
    }
}

/// Saves the full catalog record (whole-collection overwrite).
pub fn save(store: &mut dyn KvStore, items: &[MenuItem]) -> StoreResult<()> {
    let raw = serde_json::to_string(items)?;
    store.put(CATALOG_KEY, &raw)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn test_missing_record_yields_starter_catalog() {
        let store = MemoryStore::new();
        let items = load(&store);
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].name, "Taro Milk Tea");
        assert_eq!(items[0].price_cents, 450);
    }

    #[test]
    fn test_corrupt_record_yields_starter_catalog() {
        let mut store = MemoryStore::new();
        store.put(CATALOG_KEY, "{not json").unwrap();
        let items = load(&store);
        assert_eq!(items.len(), 4);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let mut store = MemoryStore::new();
        let items = vec![MenuItem {
            id: "latte".to_string(),
            name: "Latte".to_string(),
            price_cents: 500,
        }];

        save(&mut store, &items).unwrap();
        let loaded = load(&store);
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_save_overwrites_whole_record() {
        let mut store = MemoryStore::new();
        save(&mut store, &starter_catalog()).unwrap();
        save(&mut store, &[]).unwrap();
        assert!(load(&store).is_empty());
    }
}
