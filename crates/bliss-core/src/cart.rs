//! # Cart
//!
//! The mutable, single-order-in-progress aggregation of menu items.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                            │
//! │                                                                     │
//! │  Operator Action          Cart Method          State Change         │
//! │  ───────────────          ───────────          ────────────         │
//! │                                                                     │
//! │  Tap menu item ──────────► add(item) ────────► new line qty 1,      │
//! │                                                or qty += 1          │
//! │  Tap minus ──────────────► remove(id) ───────► qty -= 1; line       │
//! │                                                dropped at qty 0     │
//! │  Tap clear ──────────────► clear() ──────────► no lines             │
//! │                                                                     │
//! │  INVARIANT: every line has qty >= 1. A qty of 0 is never            │
//! │  observable - the line is deleted instead.                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing is a pure function of the lines: subtotal is an exact cent sum,
//! tax rounds once, total is their sum. Empty cart ⇒ all zero.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{MenuItem, TaxRate};

// =============================================================================
// Cart Line
// =============================================================================

/// One (item, quantity) pairing in the cart.
///
/// ## Design Notes
/// - `menu_item_id`: reference back to the catalog entry
/// - name and unit price are frozen copies taken when the line is created,
///   so later catalog changes never alter a cart in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog id of the item this line refers to.
    pub menu_item_id: String,

    /// Item name at time of adding (frozen).
    pub name: String,

    /// Unit price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart, always >= 1.
    pub quantity: i64,
}

impl CartLine {
    fn from_item(item: &MenuItem) -> Self {
        CartLine {
            menu_item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price_cents: item.price_cents,
            quantity: 1,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line amount: unit price × quantity.
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The in-progress order: one line per distinct menu item id.
///
/// ## Invariants
/// - Lines are unique by `menu_item_id` (adding the same item again only
///   increments its quantity)
/// - Every line has quantity >= 1
/// - Line order is insertion order and stays stable across reads
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds one unit of a menu item to the cart.
    ///
    /// Never fails: a missing line is created with quantity 1, an existing
    /// line is incremented. Repeated calls only increase quantity.
    pub fn add(&mut self, item: &MenuItem) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.menu_item_id == item.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::from_item(item));
        }
    }

    /// Removes one unit of an item from the cart.
    ///
    /// No-op if no line exists for the id. When the decrement would take
    /// the quantity to zero, the line is deleted entirely.
    pub fn remove(&mut self, menu_item_id: &str) {
        if let Some(pos) = self
            .lines
            .iter()
            .position(|l| l.menu_item_id == menu_item_id)
        {
            if self.lines[pos].quantity <= 1 {
                self.lines.remove(pos);
            } else {
                self.lines[pos].quantity -= 1;
            }
        }
    }

    /// Removes all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Current lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Subtotal before tax: Σ(unit price × quantity), exact in cents.
    pub fn subtotal_cents(&self) -> i64 {
        self.lines.iter().map(|l| l.line_total_cents()).sum()
    }

    /// Tax on the subtotal at the given rate, rounded to the cent.
    pub fn tax_cents(&self, rate: TaxRate) -> i64 {
        Money::from_cents(self.subtotal_cents())
            .calculate_tax(rate)
            .cents()
    }

    /// Grand total: subtotal + tax.
    pub fn total_cents(&self, rate: TaxRate) -> i64 {
        self.subtotal_cents() + self.tax_cents(rate)
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived totals for one read of the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

impl CartTotals {
    /// Computes subtotal/tax/total for the cart at the given rate.
    pub fn compute(cart: &Cart, rate: TaxRate) -> Self {
        let subtotal_cents = cart.subtotal_cents();
        let tax_cents = cart.tax_cents(rate);
        CartTotals {
            subtotal_cents,
            tax_cents,
            total_cents: subtotal_cents + tax_cents,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
