//! # bliss-store: Persistence Layer for Bliss POS
//!
//! This crate persists the engine's two records - `catalog` and `ledger` -
//! through a small key-value abstraction.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Bliss POS Data Flow                            │
//! │                                                                     │
//! │  bliss-register (after every mutation)                              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  bliss-store (THIS CRATE)                   │   │
//! │  │                                                             │   │
//! │  │   ┌──────────────┐    ┌───────────────────────────────┐    │   │
//! │  │   │   KvStore    │    │      record repositories      │    │   │
//! │  │   │   (kv.rs)    │◄───│  catalog: Vec<MenuItem>       │    │   │
//! │  │   │              │    │  ledger:  Vec<Order>          │    │   │
//! │  │   │ JsonFileStore│    │  (whole-record overwrite)     │    │   │
//! │  │   │ MemoryStore  │    └───────────────────────────────┘    │   │
//! │  │   └──────────────┘                                         │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  <data dir>/catalog.json   <data dir>/ledger.json                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`kv`] - The `KvStore` trait plus file-backed and in-memory stores
//! - [`error`] - Store error types
//! - [`repository`] - Load/save for the catalog and ledger records
//!
//! ## Failure Policy
//!
//! Loads never fail: an absent or unparsable record falls back to the
//! starter catalog / empty ledger (logged at `warn!`). Saves return
//! `StoreResult` so the caller can decide how loudly to complain.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod kv;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use kv::{JsonFileStore, KvStore, MemoryStore};
