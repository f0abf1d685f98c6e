//! # Receipt Formatter
//!
//! Renders a finalized order into a fixed-layout printable document.
//!
//! ## Formatting Contract
//! ```text
//! ┌────────────────────────────────────────┐
//! │ Bubble Bliss Cafe                      │  shop header
//! │ 2024-05-10 14:30:00                    │  placed-at, UTC
//! │ Order: ORD-1715351400000               │
//! │ Customer: Alex - 555-0100              │  phone only when present
//! │ ---------------------------------------│
//! │ Taro Milk Tea             x2     $9.00 │  one line per item
//! │ ---------------------------------------│
//! │ Subtotal                         $9.00 │
//! │ Tax (8%)                         $0.72 │
//! │ Total                            $9.72 │
//! │                                        │
//! │ Thank you! Have a sweet day ♡          │
//! └────────────────────────────────────────┘
//! ```
//!
//! The same order always yields byte-identical output: the renderer does
//! no I/O, reads no clock, and uses one fixed date format (UTC). Handing
//! the document to an actual printer is the register's collaborator's job.

use serde::Serialize;

use crate::money::Money;
use crate::order::Order;
use crate::types::TaxRate;

/// Total character width of the printable column.
pub const RECEIPT_WIDTH: usize = 40;

/// Item-name column width; longer names are truncated.
const NAME_WIDTH: usize = 26;

/// Closing message printed at the bottom of every receipt.
const CLOSING_MESSAGE: &str = "Thank you! Have a sweet day ♡";

// =============================================================================
// Receipt Document
// =============================================================================

/// A rendered receipt, ready for an external printing collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptDocument {
    /// Id of the order this receipt is for.
    pub order_id: String,

    /// The full printable text, newline-terminated.
    pub body: String,
}

/// Renders an order into its receipt document.
///
/// Pure and deterministic: same order (and shop name and rate), same
/// bytes. The tax rate only affects the `Tax (..%)` label - the amounts
/// themselves were frozen into the order at finalization.
pub fn render(order: &Order, shop_name: &str, rate: TaxRate) -> ReceiptDocument {
    let rule = "-".repeat(RECEIPT_WIDTH);
    let mut lines = Vec::with_capacity(order.items.len() + 10);

    lines.push(shop_name.to_string());
    lines.push(order.placed_at.format("%Y-%m-%d %H:%M:%S").to_string());
    lines.push(format!("Order: {}", order.id));
    lines.push(match &order.customer.phone {
        Some(phone) => format!("Customer: {} - {}", order.customer.name, phone),
        None => format!("Customer: {}", order.customer.name),
    });

    lines.push(rule.clone());
    for item in &order.items {
        lines.push(format!(
            "{:<NAME_WIDTH$}{:>5}{:>9}",
            clip(&item.name),
            format!("x{}", item.quantity),
            Money::from_cents(item.line_total_cents()).to_string(),
        ));
    }
    lines.push(rule);

    lines.push(totals_line("Subtotal", order.subtotal_cents));
    lines.push(totals_line(&tax_label(rate), order.tax_cents));
    lines.push(totals_line("Total", order.total_cents));

    lines.push(String::new());
    lines.push(CLOSING_MESSAGE.to_string());

    let mut body = lines.join("\n");
    body.push('\n');

    ReceiptDocument {
        order_id: order.id.clone(),
        body,
    }
}

fn totals_line(label: &str, cents: i64) -> String {
    format!(
        "{:<NAME_WIDTH$}{:>14}",
        label,
        Money::from_cents(cents).to_string()
    )
}

fn tax_label(rate: TaxRate) -> String {
    if rate.bps() % 100 == 0 {
        format!("Tax ({}%)", rate.bps() / 100)
    } else {
        format!("Tax ({}%)", rate.percentage())
    }
}

/// Truncates a name so the qty/amount columns always line up.
fn clip(name: &str) -> String {
    if name.chars().count() > NAME_WIDTH - 2 {
        name.chars().take(NAME_WIDTH - 2).collect()
    } else {
        name.to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderItem;
    use crate::types::Customer;
    use chrono::{TimeZone, Utc};

    fn sample_order() -> Order {
        Order {
            id: "ORD-1715351400000".to_string(),
            customer: Customer::new("Alex"),
            items: vec![OrderItem {
                menu_item_id: "taro-milk-tea".to_string(),
                name: "Taro Milk Tea".to_string(),
                unit_price_cents: 450,
                quantity: 2,
            }],
            subtotal_cents: 900,
            tax_cents: 72,
            total_cents: 972,
            placed_at: Utc.with_ymd_and_hms(2024, 5, 10, 14, 30, 0).unwrap(),
        }
    }

    fn rate() -> TaxRate {
        TaxRate::from_bps(800)
    }

    #[test]
    fn test_golden_receipt() {
        let doc = render(&sample_order(), "Bubble Bliss Cafe", rate());
        let expected = "\
Bubble Bliss Cafe
2024-05-10 14:30:00
Order: ORD-1715351400000
Customer: Alex
----------------------------------------
Taro Milk Tea                x2    $9.00
----------------------------------------
Subtotal                           $9.00
Tax (8%)                           $0.72
Total                              $9.72

Thank you! Have a sweet day ♡
";
        assert_eq!(doc.body, expected);
        assert_eq!(doc.order_id, "ORD-1715351400000");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let order = sample_order();
        let a = render(&order, "Bubble Bliss Cafe", rate());
        let b = render(&order, "Bubble Bliss Cafe", rate());
        assert_eq!(a, b);
    }

    #[test]
    fn test_phone_appears_when_present() {
        let mut order = sample_order();
        order.customer = Customer::with_phone("Alex", "555-0100");
        let doc = render(&order, "Bubble Bliss Cafe", rate());
        assert!(doc.body.contains("Customer: Alex - 555-0100\n"));
    }

    #[test]
    fn test_item_lines_are_fixed_width() {
        let mut order = sample_order();
        order.items.push(OrderItem {
            menu_item_id: "x".to_string(),
            name: "A Very Long Specialty Drink Name Indeed".to_string(),
            unit_price_cents: 1234,
            quantity: 1,
        });
        let doc = render(&order, "Bubble Bliss Cafe", rate());

        for line in doc.body.lines().skip(5).take(order.items.len()) {
            assert_eq!(line.chars().count(), RECEIPT_WIDTH, "line: {line:?}");
        }
    }

    #[test]
    fn test_fractional_tax_rate_label() {
        assert_eq!(tax_label(TaxRate::from_bps(825)), "Tax (8.25%)");
        assert_eq!(tax_label(TaxRate::from_bps(800)), "Tax (8%)");
        assert_eq!(tax_label(TaxRate::from_bps(1000)), "Tax (10%)");
    }
}
