//! # Store Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  std::io::Error / serde_json::Error                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module)                                           │
//! │       │                                                             │
//! │       ├── on LOAD: swallowed - repository falls back to defaults    │
//! │       │            and logs a warn!                                 │
//! │       └── on SAVE: returned - the register logs and carries on      │
//! │                    (availability over strictness at the counter)    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file read/write failed.
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be encoded to or decoded from JSON.
    #[error("record serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for persistence operations.
pub type StoreResult<T> = Result<T, StoreError>;
