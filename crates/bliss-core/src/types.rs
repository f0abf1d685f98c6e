//! # Domain Types
//!
//! Core domain types used throughout Bliss POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │    MenuItem    │   │    Customer    │   │    TaxRate     │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  id (slug)     │   │  name          │   │  bps (u32)     │      │
//! │  │  name          │   │  phone (opt)   │   │  800 = 8%      │      │
//! │  │  price_cents   │   └────────────────┘   └────────────────┘      │
//! │  └────────────────┘                                                 │
//! │                                                                     │
//! │  Order and its frozen OrderItem lines live in [`crate::order`];     │
//! │  the in-progress CartLine lives in [`crate::cart`].                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Pattern
//! A MenuItem id is derived from its name at creation time (slug), with a
//! uniqueness suffix on display-name collisions. Two items may share a
//! name but never an id - name is NOT a merge key.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 800 bps = 8% with no float in
/// sight. The rate multiplies cent amounts using pure integer math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::from_bps(crate::DEFAULT_TAX_RATE_BPS)
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A purchasable item in the catalog.
///
/// Created via [`crate::catalog::Catalog::add_item`], never mutated in
/// place, never deleted by the core. Orders snapshot the fields they need,
/// so a MenuItem is safe to clone freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Slug identifier derived from the name (plus a uniqueness suffix on
    /// display-name collisions). Unique within the catalog.
    pub id: String,

    /// Display name shown to the operator and on receipts.
    pub name: String,

    /// Price in cents (smallest currency unit), always >= 1.
    pub price_cents: i64,
}

impl MenuItem {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// Customer details captured alongside the in-progress cart.
///
/// Transient input until finalization; the finalized order carries a copy.
/// `name` must be non-empty after trimming by the time an order is placed -
/// [`crate::order::Order::finalize`] enforces this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer name (required at finalization).
    pub name: String,

    /// Contact phone, optional.
    pub phone: Option<String>,
}

impl Customer {
    /// Creates a customer with a name and no phone.
    pub fn new(name: impl Into<String>) -> Self {
        Customer {
            name: name.into(),
            phone: None,
        }
    }

    /// Creates a customer with a name and phone number.
    pub fn with_phone(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Customer {
            name: name.into(),
            phone: Some(phone.into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(800);
        assert_eq!(rate.bps(), 800);
        assert!((rate.percentage() - 8.0).abs() < 0.001);
        assert!(!rate.is_zero());
        assert!(TaxRate::zero().is_zero());
    }

    #[test]
    fn test_tax_rate_default_is_engine_rate() {
        assert_eq!(TaxRate::default().bps(), crate::DEFAULT_TAX_RATE_BPS);
    }

    #[test]
    fn test_menu_item_price() {
        let item = MenuItem {
            id: "taro-milk-tea".to_string(),
            name: "Taro Milk Tea".to_string(),
            price_cents: 450,
        };
        assert_eq!(item.price(), Money::from_cents(450));
    }
}
