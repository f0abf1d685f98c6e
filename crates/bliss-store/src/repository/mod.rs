//! # Record Repositories
//!
//! Load/save for the two persisted records.
//!
//! - [`catalog`] - the menu (`Vec<MenuItem>`), starter catalog fallback
//! - [`ledger`] - finalized orders (`Vec<Order>`), empty fallback
//!
//! Both records are saved as whole JSON documents after every mutation
//! (write-through). Loads never fail: absent or unparsable records fall
//! back to defaults so the counter can keep trading.

pub mod catalog;
pub mod ledger;
