//! # Order Id Generation
//!
//! Collision-checked `ORD-<timestamp>` identifiers.
//!
//! ## Why not just the wall clock?
//! Deriving an id from `now()` alone is a race: two orders placed within
//! the same millisecond would share an id. The generator keeps the last
//! issued timestamp and bumps forward whenever the clock repeats or runs
//! backwards, so ids are strictly increasing within a process while still
//! reading as "the moment the order was placed".

use chrono::{DateTime, Utc};

use crate::ORDER_ID_PREFIX;

// =============================================================================
// Order Id Generator
// =============================================================================

/// Issues unique, strictly increasing order ids.
///
/// One generator per process (the register owns it). Pure aside from the
/// state it carries: the caller passes the current instant in.
#[derive(Debug, Clone, Default)]
pub struct OrderIdGenerator {
    last_millis: i64,
}

impl OrderIdGenerator {
    /// Creates a fresh generator.
    pub fn new() -> Self {
        OrderIdGenerator { last_millis: 0 }
    }

    /// Issues the next order id for the given instant.
    ///
    /// ## Example
    /// ```rust
    /// use bliss_core::ids::OrderIdGenerator;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let mut ids = OrderIdGenerator::new();
    /// let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
    /// let first = ids.next_id(now);
    /// let second = ids.next_id(now); // same tick, still unique
    /// assert!(first.starts_with("ORD-"));
    /// assert_ne!(first, second);
    /// ```
    pub fn next_id(&mut self, now: DateTime<Utc>) -> String {
        let mut millis = now.timestamp_millis();
        if millis <= self.last_millis {
            millis = self.last_millis + 1;
        }
        self.last_millis = millis;
        format!("{ORDER_ID_PREFIX}{millis}")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_millis(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn test_id_reads_as_timestamp() {
        let mut ids = OrderIdGenerator::new();
        let id = ids.next_id(at_millis(1_714_500_000_000));
        assert_eq!(id, "ORD-1714500000000");
    }

    #[test]
    fn test_same_tick_yields_distinct_ids() {
        let mut ids = OrderIdGenerator::new();
        let now = at_millis(1_714_500_000_000);
        let a = ids.next_id(now);
        let b = ids.next_id(now);
        let c = ids.next_id(now);
        assert_eq!(a, "ORD-1714500000000");
        assert_eq!(b, "ORD-1714500000001");
        assert_eq!(c, "ORD-1714500000002");
    }

    #[test]
    fn test_clock_running_backwards_still_increases() {
        let mut ids = OrderIdGenerator::new();
        let a = ids.next_id(at_millis(2_000));
        let b = ids.next_id(at_millis(1_000)); // clock stepped back
        assert_eq!(a, "ORD-2000");
        assert_eq!(b, "ORD-2001");
    }

    #[test]
    fn test_clock_moving_forward_uses_the_clock() {
        let mut ids = OrderIdGenerator::new();
        ids.next_id(at_millis(1_000));
        let b = ids.next_id(at_millis(5_000));
        assert_eq!(b, "ORD-5000");
    }

    #[test]
    fn test_id_for_fixed_calendar_date() {
        // Sanity check against a fixed calendar date.
        let mut ids = OrderIdGenerator::new();
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap();
        let id = ids.next_id(now);
        assert_eq!(id, format!("ORD-{}", now.timestamp_millis()));
    }
}
