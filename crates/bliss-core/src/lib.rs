//! # bliss-core: Pure Business Logic for Bliss POS
//!
//! This crate is the **heart** of the Bliss POS order-processing engine.
//! It contains all business logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Bliss POS Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (out of scope)                 │   │
//! │  │    Menu view ──► Cart view ──► Receipt view ──► History     │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                  bliss-register (engine)                    │   │
//! │  │    add_menu_item, add_to_cart, place_order, history, ...    │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │               ★ bliss-core (THIS CRATE) ★                   │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌───────┐ ┌──────┐ ┌────────┐ ┌─────────────┐ │   │
//! │  │  │ catalog │ │ money │ │ cart │ │ ledger │ │   receipt   │ │   │
//! │  │  │MenuItem │ │ Money │ │ Cart │ │ Order  │ │  history    │ │   │
//! │  │  └─────────┘ └───────┘ └──────┘ └────────┘ └─────────────┘ │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO CLOCK READS • NO PRINTING • PURE FUNCTIONS    │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                 bliss-store (persistence)                   │   │
//! │  │        JSON key-value records: catalog + ledger             │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (TaxRate, MenuItem, Customer)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`catalog`] - The set of purchasable menu items
//! - [`cart`] - The in-progress order and its derived totals
//! - [`order`] - Immutable finalized orders
//! - [`ledger`] - The ordered collection of finalized orders
//! - [`history`] - Date/text filtering and revenue aggregation
//! - [`receipt`] - Fixed-layout printable receipt documents
//! - [`ids`] - Collision-checked order id generation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input =
//!    same output. Callers pass timestamps in; the core never reads a clock.
//! 2. **No I/O**: File system, network, and printing access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bliss_core::money::Money;
//! use bliss_core::types::TaxRate;
//!
//! // Parse a price the way the menu form enters it
//! let price = Money::parse("4.50").unwrap();
//! assert_eq!(price.cents(), 450);
//!
//! // 8% sales tax on a $9.00 subtotal
//! let rate = TaxRate::from_bps(bliss_core::DEFAULT_TAX_RATE_BPS);
//! let tax = Money::from_cents(900).calculate_tax(rate);
//! assert_eq!(tax.cents(), 72);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod history;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod order;
pub mod receipt;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bliss_core::Money` instead of
// `use bliss_core::money::Money`.

pub use cart::{Cart, CartLine, CartTotals};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, InvalidInput, InvalidOrder};
pub use history::{HistoryFilter, HistoryReport};
pub use ids::OrderIdGenerator;
pub use ledger::Ledger;
pub use money::Money;
pub use order::{Order, OrderItem};
pub use receipt::ReceiptDocument;
pub use types::{Customer, MenuItem, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax rate applied to every order, in basis points (800 = 8%).
///
/// ## Why a constant?
/// The counter runs in a single jurisdiction with one flat rate. Per-item
/// or per-tenant rates would live on the menu item, which is out of scope.
pub const DEFAULT_TAX_RATE_BPS: u32 = 800;

/// Prefix for order identifiers (`ORD-<timestamp>`).
pub const ORDER_ID_PREFIX: &str = "ORD-";
