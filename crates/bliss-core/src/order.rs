//! # Orders
//!
//! Immutable finalized orders and the finalization step itself.
//!
//! ## Finalization
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 Cart ──► Order (the only transition)                │
//! │                                                                     │
//! │  Order::finalize(cart, customer, id, placed_at, rate)               │
//! │       │                                                             │
//! │       ├── cart empty? ──────────► InvalidOrder::EmptyCart           │
//! │       ├── name blank? ──────────► InvalidOrder::CustomerNameRequired│
//! │       │                                                             │
//! │       ▼                                                             │
//! │  snapshot every line, compute subtotal/tax/total once, stamp id     │
//! │  and timestamp ──► Order (fully formed, never mutated again)        │
//! │                                                                     │
//! │  There is no draft state. An order either exists complete in the    │
//! │  ledger or not at all; on failure nothing is mutated.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::error::{CoreResult, InvalidOrder};
use crate::money::Money;
use crate::types::{Customer, TaxRate};

// =============================================================================
// Order Item
// =============================================================================

/// A line item in a finalized order.
/// Uses the snapshot pattern to freeze item data at the time of sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Catalog id at time of sale (frozen).
    pub menu_item_id: String,

    /// Item name at time of sale (frozen).
    pub name: String,

    /// Unit price in cents at time of sale (frozen).
    pub unit_price_cents: i64,

    /// Quantity sold.
    pub quantity: i64,
}

impl OrderItem {
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
// Order
// =============================================================================

/// A finalized order.
///
/// Immutable once created: the items are snapshot copies, so later catalog
/// or cart mutations never retroactively alter a stored order. Owned by
/// the ledger from creation until explicit deletion.
///
/// ## Invariants
/// - `subtotal_cents = Σ(unit_price × quantity)`
/// - `tax_cents = round(subtotal × rate)` (rounded once, to the cent)
/// - `total_cents = subtotal_cents + tax_cents`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Globally unique id, `ORD-<timestamp>` (see [`crate::ids`]).
    pub id: String,

    /// Customer the order was placed for.
    pub customer: Customer,

    /// Frozen line items, in cart order.
    pub items: Vec<OrderItem>,

    /// Subtotal before tax, in cents.
    pub subtotal_cents: i64,

    /// Tax amount, in cents.
    pub tax_cents: i64,

    /// Grand total, in cents.
    pub total_cents: i64,

    /// When the order was placed (ISO-8601 when serialized).
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Freezes a cart and customer into an immutable order.
    ///
    /// Pure: the caller supplies the id and timestamp, and the cart is
    /// borrowed immutably - clearing it afterwards is the register's job,
    /// and only happens once this has succeeded.
    ///
    /// ## Preconditions
    /// - at least one cart line, else [`InvalidOrder::EmptyCart`]
    /// - customer name non-empty after trim, else
    ///   [`InvalidOrder::CustomerNameRequired`]
    pub fn finalize(
        cart: &Cart,
        customer: Customer,
        id: String,
        placed_at: DateTime<Utc>,
        rate: TaxRate,
    ) -> CoreResult<Order> {
        if cart.is_empty() {
            return Err(InvalidOrder::EmptyCart.into());
        }
        let trimmed = customer.name.trim();
        if trimmed.is_empty() {
            return Err(InvalidOrder::CustomerNameRequired.into());
        }

        let customer = Customer {
            name: trimmed.to_string(),
            // A blank phone field means "not given".
            phone: customer
                .phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
        };

        let items: Vec<OrderItem> = cart
            .lines()
            .iter()
            .map(|l| OrderItem {
                menu_item_id: l.menu_item_id.clone(),
                name: l.name.clone(),
                unit_price_cents: l.unit_price_cents,
                quantity: l.quantity,
            })
            .collect();

        let subtotal_cents = cart.subtotal_cents();
        let tax_cents = cart.tax_cents(rate);

        Ok(Order {
            id,
            customer,
            items,
            subtotal_cents,
            tax_cents,
            total_cents: subtotal_cents + tax_cents,
            placed_at,
        })
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
