//! # bliss-register: Operator-Facing Engine for Bliss POS
//!
//! One [`Register`] per counter. It owns the in-memory catalog, cart and
//! ledger, reads the clock, issues order ids, and writes records through
//! to storage after every mutation.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Register Operations                           │
//! │                                                                     │
//! │  Operator Action           Register Call          Side Effects      │
//! │  ───────────────           ─────────────          ────────────      │
//! │                                                                     │
//! │  Add menu item ──────────► add_menu_item() ─────► save catalog      │
//! │                                                                     │
//! │  Tap a drink ────────────► add_to_cart() ───────► (memory only)     │
//! │                                                                     │
//! │  Checkout ───────────────► place_order() ───────► save ledger,      │
//! │                                                   clear cart,       │
//! │                                                   print receipt     │
//! │                                                                     │
//! │  Void an order ──────────► delete_order() ──────► save ledger       │
//! │                                                                     │
//! │  Browse history ─────────► history() ───────────► (read only)       │
//! │                                                                     │
//! │  NOTE: failed SAVES are logged and swallowed - the in-memory        │
//! │        state is authoritative for the rest of the session.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use bliss_core::{Customer, HistoryFilter};
//! use bliss_register::Register;
//! use bliss_store::MemoryStore;
//!
//! let mut register = Register::with_store(Box::new(MemoryStore::new()));
//!
//! let menu = register.menu();
//! register.add_to_cart(&menu[0].id).unwrap();
//! let order = register.place_order(Customer::new("Alex")).unwrap();
//!
//! let report = register.history(&HistoryFilter::all());
//! assert_eq!(report.revenue_cents, order.total_cents);
//! ```

pub mod error;
pub mod printer;
pub mod register;

pub use error::{RegisterError, RegisterResult};
pub use printer::{LogPrinter, MemoryPrinter, NullPrinter, ReceiptPrinter};
pub use register::Register;

/// Shop name printed on every receipt.
pub const SHOP_NAME: &str = "Bubble Bliss Cafe";
