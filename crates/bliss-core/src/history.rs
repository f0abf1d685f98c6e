//! # History Query
//!
//! Filters the ledger by date range and free text, and totals the revenue
//! of whatever matched.
//!
//! ## Matching Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  query(orders, { from, to, text })                                  │
//! │                                                                     │
//! │  Date:  from 00:00:00.000  <=  placed_at  <=  to 23:59:59.999       │
//! │         (omitted bounds are ±∞; both endpoints inclusive at day     │
//! │          granularity, so a one-day range catches the whole day)     │
//! │                                                                     │
//! │  Text:  case-insensitive substring over customer name, any item     │
//! │         name, or the order id; empty text matches everything        │
//! │                                                                     │
//! │  An order matches iff BOTH filters match (logical AND).             │
//! │  Output preserves ledger order; revenue = Σ matched totals.         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::order::Order;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

// =============================================================================
// Filter
// =============================================================================

/// Operator-entered history filters. All fields optional; an empty filter
/// matches every order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryFilter {
    /// Earliest calendar day to include (inclusive, UTC).
    pub from: Option<NaiveDate>,

    /// Latest calendar day to include (inclusive through its last
    /// millisecond, UTC).
    pub to: Option<NaiveDate>,

    /// Free-text search over customer name, item names, and order id.
    pub text: Option<String>,
}

impl HistoryFilter {
    /// A filter that matches everything.
    pub fn all() -> Self {
        HistoryFilter::default()
    }

    fn matches(&self, order: &Order) -> bool {
        self.matches_date(order) && self.matches_text(order)
    }

    fn matches_date(&self, order: &Order) -> bool {
        let placed_ms = order.placed_at.timestamp_millis();
        if let Some(from) = self.from {
            if placed_ms < day_start_millis(from) {
                return false;
            }
        }
        if let Some(to) = self.to {
            if placed_ms > day_start_millis(to) + MILLIS_PER_DAY - 1 {
                return false;
            }
        }
        true
    }

    fn matches_text(&self, order: &Order) -> bool {
        let needle = match &self.text {
            Some(t) if !t.trim().is_empty() => t.trim().to_lowercase(),
            _ => return true,
        };
        order.customer.name.to_lowercase().contains(&needle)
            || order.id.to_lowercase().contains(&needle)
            || order
                .items
                .iter()
                .any(|i| i.name.to_lowercase().contains(&needle))
    }
}

/// Start of the given UTC calendar day in epoch milliseconds.
fn day_start_millis(day: NaiveDate) -> i64 {
    day.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

// =============================================================================
// Report
// =============================================================================

/// Matched orders (in ledger order) plus their summed revenue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryReport {
    /// Orders that matched, preserving the input (ledger) order.
    pub orders: Vec<Order>,

    /// Σ total over the matched orders, in cents. Each total already
    /// carries 2-decimal precision, so the sum needs no further rounding.
    pub revenue_cents: i64,
}

/// Runs the history query against a ledger snapshot.
pub fn query(orders: &[Order], filter: &HistoryFilter) -> HistoryReport {
    let matched: Vec<Order> = orders
        .iter()
        .filter(|o| filter.matches(o))
        .cloned()
        .collect();
    let revenue_cents = matched.iter().map(|o| o.total_cents).sum();
    HistoryReport {
        orders: matched,
        revenue_cents,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
