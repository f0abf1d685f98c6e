//! # Catalog Store
//!
//! The set of purchasable menu items.
//!
//! ## Identity Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  add_item("Taro Milk Tea", $4.50)                                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  slug: "taro-milk-tea" ─── unused? ──► id = "taro-milk-tea"         │
//! │       │                                                             │
//! │       ▼ name already in catalog (case-insensitive)                  │
//! │  id = "taro-milk-tea-<millis>"  (bumped until unique)               │
//! │                                                                     │
//! │  Same display name ⇒ BOTH entries kept. Name is not a merge key;    │
//! │  "same name, different catalog entry" is intentional.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage order is insertion order; [`Catalog::list`] is a sorted view.

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, InvalidInput};
use crate::money::Money;
use crate::types::MenuItem;

/// Derives the base slug for a menu item name: lowercased, whitespace runs
/// collapsed to single hyphens.
fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

// =============================================================================
// Catalog
// =============================================================================

/// Process-scoped store of menu items.
///
/// Populated once at startup from the persistence collaborator and written
/// back after each mutation by the register; the catalog itself performs
/// no I/O.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog { items: Vec::new() }
    }

    /// Creates a catalog from previously persisted items.
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        Catalog { items }
    }

    /// Adds a menu item, deriving its identifier from the name.
    ///
    /// ## Behavior
    /// - Name must be non-empty after trimming, price at least one cent
    /// - Id is the name slug; if an item with the same display name
    ///   (case-insensitive) already exists, the incoming item gets a
    ///   disambiguated id instead of overwriting - the store keeps both
    /// - `now_millis` seeds the uniqueness suffix; the suffix is bumped
    ///   until the id is actually unused, so two creations within the same
    ///   clock tick cannot collide
    ///
    /// ## Example
    /// ```rust
    /// use bliss_core::catalog::Catalog;
    /// use bliss_core::money::Money;
    ///
    /// let mut catalog = Catalog::new();
    /// let first = catalog.add_item("Latte", Money::from_cents(500), 1_700_000_000_000).unwrap();
    /// let second = catalog.add_item("Latte", Money::from_cents(550), 1_700_000_000_000).unwrap();
    /// assert_eq!(first.id, "latte");
    /// assert_ne!(first.id, second.id);
    /// assert_eq!(first.name, second.name);
    /// ```
    pub fn add_item(&mut self, name: &str, price: Money, now_millis: i64) -> CoreResult<MenuItem> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InvalidInput::NameRequired.into());
        }
        if !price.is_positive() {
            return Err(InvalidInput::PriceNotPositive.into());
        }

        let base = slugify(name);
        let lowered = name.to_lowercase();
        let name_taken = self
            .items
            .iter()
            .any(|m| m.name.to_lowercase() == lowered);

        let mut id = if name_taken {
            format!("{base}-{now_millis}")
        } else {
            base.clone()
        };

        // Collision-checked suffix: bump until the id is actually free.
        let mut suffix = now_millis;
        while self.items.iter().any(|m| m.id == id) {
            suffix += 1;
            id = format!("{base}-{suffix}");
        }

        let item = MenuItem {
            id,
            name: name.to_string(),
            price_cents: price.cents(),
        };
        self.items.push(item.clone());
        Ok(item)
    }

    /// Looks up a menu item by id.
    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|m| m.id == id)
    }

    /// Returns all items sorted by name, ascending and case-insensitive.
    ///
    /// This is a derived view; underlying storage keeps insertion order.
    /// The sort is stable, so items sharing a display name stay in
    /// creation order.
    pub fn list(&self) -> Vec<MenuItem> {
        let mut sorted = self.items.clone();
        sorted.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        sorted
    }

    /// Returns the items in insertion order (the persisted shape).
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    const T0: i64 = 1_714_500_000_000;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Taro Milk Tea"), "taro-milk-tea");
        assert_eq!(slugify("  Brown   Sugar  Latte "), "brown-sugar-latte");
        assert_eq!(slugify("Latte"), "latte");
    }

    #[test]
    fn test_add_item_basic() {
        let mut catalog = Catalog::new();
        let item = catalog
            .add_item("Taro Milk Tea", Money::from_cents(450), T0)
            .unwrap();

        assert_eq!(item.id, "taro-milk-tea");
        assert_eq!(item.name, "Taro Milk Tea");
        assert_eq!(item.price_cents, 450);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_add_item_trims_name() {
        let mut catalog = Catalog::new();
        let item = catalog
            .add_item("  Matcha Latte  ", Money::from_cents(525), T0)
            .unwrap();
        assert_eq!(item.name, "Matcha Latte");
        assert_eq!(item.id, "matcha-latte");
    }

    #[test]
    fn test_add_item_rejects_empty_name() {
        let mut catalog = Catalog::new();
        let err = catalog
            .add_item("   ", Money::from_cents(450), T0)
            .unwrap_err();
        assert_eq!(err, CoreError::Input(InvalidInput::NameRequired));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_item_rejects_non_positive_price() {
        let mut catalog = Catalog::new();
        assert!(catalog.add_item("Water", Money::zero(), T0).is_err());
        assert!(catalog
            .add_item("Water", Money::from_cents(-100), T0)
            .is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_duplicate_name_keeps_both_entries() {
        let mut catalog = Catalog::new();
        let first = catalog.add_item("Latte", Money::from_cents(500), T0).unwrap();
        let second = catalog.add_item("Latte", Money::from_cents(550), T0).unwrap();

        assert_eq!(first.id, "latte");
        assert_eq!(second.id, format!("latte-{T0}"));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("latte").unwrap().price_cents, 500);
        assert_eq!(catalog.get(&second.id).unwrap().price_cents, 550);
    }

    #[test]
    fn test_duplicate_name_is_case_insensitive() {
        let mut catalog = Catalog::new();
        catalog.add_item("Latte", Money::from_cents(500), T0).unwrap();
        let second = catalog.add_item("LATTE", Money::from_cents(550), T0).unwrap();
        assert_ne!(second.id, "latte");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_same_clock_tick_never_collides() {
        let mut catalog = Catalog::new();
        let a = catalog.add_item("Latte", Money::from_cents(500), T0).unwrap();
        let b = catalog.add_item("Latte", Money::from_cents(510), T0).unwrap();
        let c = catalog.add_item("Latte", Money::from_cents(520), T0).unwrap();

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_list_sorts_by_name_case_insensitive() {
        let mut catalog = Catalog::new();
        catalog
            .add_item("Strawberry Boba", Money::from_cents(475), T0)
            .unwrap();
        catalog
            .add_item("brown sugar latte", Money::from_cents(500), T0)
            .unwrap();
        catalog
            .add_item("Matcha Latte", Money::from_cents(525), T0)
            .unwrap();

        let names: Vec<String> = catalog.list().into_iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec!["brown sugar latte", "Matcha Latte", "Strawberry Boba"]
        );

        // Underlying storage keeps insertion order.
        assert_eq!(catalog.items()[0].name, "Strawberry Boba");
    }

    #[test]
    fn test_get_unknown_id() {
        let catalog = Catalog::new();
        assert!(catalog.get("missing").is_none());
    }
}
