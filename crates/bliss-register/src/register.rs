//! # The Register
//!
//! One `Register` instance per counter session. It is the only layer that
//! reads the wall clock; everything below it is pure and takes timestamps
//! as arguments.
//!
//! ## Write-Through Persistence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Save Policy                                    │
//! │                                                                     │
//! │  Mutation                  Record Saved          On Save Failure    │
//! │  ────────                  ────────────          ───────────────    │
//! │  add_menu_item()           catalog               warn! + continue   │
//! │  place_order()             ledger                warn! + continue   │
//! │  delete_order()            ledger                warn! + continue   │
//! │                                                                     │
//! │  Cart mutations touch no record: an abandoned cart is meant to      │
//! │  vanish with the session.                                           │
//! │                                                                     │
//! │  In-memory state is authoritative for the running session; the      │
//! │  next successful save rewrites the whole record anyway.             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::Path;

use chrono::Utc;
use tracing::{debug, info, warn};

use bliss_core::{
    history, receipt, Cart, CartLine, CartTotals, Catalog, CoreError, Customer, HistoryFilter,
    HistoryReport, Ledger, MenuItem, Money, Order, OrderIdGenerator, ReceiptDocument, TaxRate,
};
use bliss_store::repository::{catalog as catalog_record, ledger as ledger_record};
use bliss_store::{JsonFileStore, KvStore};

use crate::error::RegisterResult;
use crate::printer::{LogPrinter, ReceiptPrinter};
use crate::SHOP_NAME;

// =============================================================================
// Register
// =============================================================================

/// The order-processing engine for one counter.
pub struct Register {
    store: Box<dyn KvStore>,
    printer: Box<dyn ReceiptPrinter>,
    catalog: Catalog,
    ledger: Ledger,
    cart: Cart,
    ids: OrderIdGenerator,
    tax_rate: TaxRate,
    shop_name: String,
}

impl Register {
    /// Opens a register backed by JSON files under `data_dir`.
    ///
    /// Records are loaded once here; afterwards the in-memory state is
    /// authoritative and every mutation writes through.
    pub fn open(data_dir: impl AsRef<Path>) -> RegisterResult<Self> {
        let store = JsonFileStore::open(data_dir)?;
        Ok(Register::with_store(Box::new(store)))
    }

    /// Creates a register over any [`KvStore`].
    ///
    /// Used directly with a `MemoryStore` for tests and ephemeral
    /// sessions; [`Register::open`] is the file-backed convenience.
    pub fn with_store(store: Box<dyn KvStore>) -> Self {
        let catalog = Catalog::from_items(catalog_record::load(store.as_ref()));
        let ledger = Ledger::from_orders(ledger_record::load(store.as_ref()));
        info!(
            menu_items = catalog.len(),
            orders = ledger.len(),
            "register opened"
        );

        Register {
            store,
            printer: Box::new(LogPrinter),
            catalog,
            ledger,
            cart: Cart::new(),
            ids: OrderIdGenerator::new(),
            tax_rate: TaxRate::default(),
            shop_name: SHOP_NAME.to_string(),
        }
    }

    /// Replaces the receipt printer.
    pub fn set_printer(&mut self, printer: Box<dyn ReceiptPrinter>) {
        self.printer = printer;
    }

    /// The flat tax rate applied to every order.
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Shop name printed on receipts.
    pub fn shop_name(&self) -> &str {
        &self.shop_name
    }

    // =========================================================================
    // Menu Operations
    // =========================================================================

    /// The menu, sorted by item name for display.
    pub fn menu(&self) -> Vec<MenuItem> {
        self.catalog.list()
    }

    /// Adds a menu item from operator-entered form fields.
    ///
    /// `price` arrives as free text (e.g. `"4.50"`); parsing and the
    /// name/price rules live in bliss-core. On success the catalog record
    /// is written through.
    pub fn add_menu_item(&mut self, name: &str, price: &str) -> RegisterResult<MenuItem> {
        debug!(name = %name, price = %price, "add_menu_item");

        let price = Money::parse(price).map_err(CoreError::from)?;
        let item = self
            .catalog
            .add_item(name, price, Utc::now().timestamp_millis())?;

        self.save_catalog();
        info!(item_id = %item.id, name = %item.name, price_cents = item.price_cents, "menu item added");
        Ok(item)
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Adds one unit of a menu item to the cart.
    ///
    /// The cart line freezes the item's name and price at this moment;
    /// later menu edits do not reach into open carts.
    pub fn add_to_cart(&mut self, item_id: &str) -> RegisterResult<()> {
        let item = self
            .catalog
            .get(item_id)
            .cloned()
            .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))?;

        self.cart.add(&item);
        debug!(item_id = %item_id, lines = self.cart.line_count(), "added to cart");
        Ok(())
    }

    /// Removes one unit of a menu item from the cart. Unknown ids are a
    /// no-op, matching a stale button press.
    pub fn remove_from_cart(&mut self, item_id: &str) {
        self.cart.remove(item_id);
        debug!(item_id = %item_id, lines = self.cart.line_count(), "removed from cart");
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        debug!("cart cleared");
    }

    /// Current cart lines, in the order items were first added.
    pub fn cart_lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Subtotal, tax and total for the current cart.
    pub fn cart_totals(&self) -> CartTotals {
        CartTotals::compute(&self.cart, self.tax_rate)
    }

    // =========================================================================
    // Order Operations
    // =========================================================================

    /// Finalizes the cart into an order: ledger entry, write-through save,
    /// cart reset, receipt to the printer.
    ///
    /// The cart is only cleared once finalization succeeds, so a rejected
    /// checkout (empty cart, missing customer name) leaves it intact for
    /// the operator to fix.
    pub fn place_order(&mut self, customer: Customer) -> RegisterResult<Order> {
        let now = Utc::now();
        let id = self.ids.next_id(now);
        let order = Order::finalize(&self.cart, customer, id, now, self.tax_rate)?;

        self.ledger.append(order.clone());
        self.save_ledger();
        self.cart.clear();

        let doc = receipt::render(&order, &self.shop_name, self.tax_rate);
        if let Err(e) = self.printer.print(&doc) {
            warn!(order_id = %order.id, error = %e, "receipt printing failed");
        }

        info!(
            order_id = %order.id,
            customer = %order.customer.name,
            total_cents = order.total_cents,
            items = order.items.len(),
            "order placed"
        );
        Ok(order)
    }

    /// Re-renders and prints the receipt for a past order, if it exists.
    pub fn reprint(&mut self, order_id: &str) -> Option<ReceiptDocument> {
        let order = self.ledger.get(order_id)?;
        let doc = receipt::render(order, &self.shop_name, self.tax_rate);
        if let Err(e) = self.printer.print(&doc) {
            warn!(order_id = %order_id, error = %e, "receipt printing failed");
        }
        Some(doc)
    }

    /// Deletes an order from the ledger. Returns whether anything was
    /// removed; deleting an unknown id is a no-op.
    pub fn delete_order(&mut self, order_id: &str) -> bool {
        let removed = self.ledger.delete(order_id);
        if removed {
            self.save_ledger();
            info!(order_id = %order_id, "order deleted");
        } else {
            debug!(order_id = %order_id, "delete_order: no such order");
        }
        removed
    }

    /// All orders, newest first.
    pub fn orders(&self) -> &[Order] {
        self.ledger.all()
    }

    /// Filters order history and totals its revenue.
    pub fn history(&self, filter: &HistoryFilter) -> HistoryReport {
        history::query(self.ledger.all(), filter)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn save_catalog(&mut self) {
        if let Err(e) = catalog_record::save(self.store.as_mut(), self.catalog.items()) {
            warn!(error = %e, "catalog save failed, keeping in-memory state");
        }
    }

    fn save_ledger(&mut self) {
        if let Err(e) = ledger_record::save(self.store.as_mut(), self.ledger.all()) {
            warn!(error = %e, "ledger save failed, keeping in-memory state");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
